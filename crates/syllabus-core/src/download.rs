//! Download filename resolution.
//!
//! The saved filename is chosen in order of preference:
//! 1. the `filename` parameter of the `Content-Disposition` response header
//! 2. the material title plus an extension looked up from its MIME type
//! 3. the material title plus [`FALLBACK_EXTENSION`]

use crate::config::FALLBACK_EXTENSION;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `filename=...` and `filename*=...` parameters. The value is either
/// quoted (group 1 or 2) or runs to the next `;` (group 3).
static FILENAME_PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)filename[^;=\n]*=\s*(?:"([^"]*)"|'([^']*)'|([^;\n]*))"#)
        .expect("Content-Disposition filename pattern must compile")
});

/// File extension (with leading dot) for a MIME type, or `None` when unknown.
///
/// Parameters such as `; charset=utf-8` are ignored.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    let essence = mime
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let ext = match essence.as_str() {
        "application/pdf" => ".pdf",
        "application/msword" => ".doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => ".docx",
        "application/vnd.ms-powerpoint" => ".ppt",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => ".pptx",
        "application/vnd.ms-excel" => ".xls",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => ".xlsx",
        "text/plain" => ".txt",
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "video/mp4" => ".mp4",
        "application/zip" => ".zip",
        _ => return None,
    };
    Some(ext)
}

/// Extracts the filename from a `Content-Disposition` header value.
///
/// Surrounding quotes are stripped. Returns `None` when the header has no
/// filename parameter or the parameter is empty.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let captures = FILENAME_PARAM.captures(header)?;
    let raw = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?
        .as_str();

    let name: String = raw.trim().chars().filter(|c| *c != '"' && *c != '\'').collect();
    (!name.is_empty()).then_some(name)
}

/// Chooses the name a downloaded file is saved under.
///
/// ```
/// use syllabus_core::download::resolve_download_filename;
///
/// assert_eq!(
///     resolve_download_filename(None, "Week 1", "application/pdf"),
///     "Week 1.pdf"
/// );
/// assert_eq!(
///     resolve_download_filename(Some(r#"attachment; filename="w1.pptx""#), "Week 1", "application/pdf"),
///     "w1.pptx"
/// );
/// ```
pub fn resolve_download_filename(
    content_disposition: Option<&str>,
    title: &str,
    mime: &str,
) -> String {
    if let Some(name) = content_disposition.and_then(filename_from_content_disposition) {
        return name;
    }

    let ext = extension_for_mime(mime).unwrap_or(FALLBACK_EXTENSION);
    format!("{title}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table_coverage() {
        let cases = [
            ("application/pdf", ".pdf"),
            ("application/msword", ".doc"),
            (
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                ".docx",
            ),
            ("application/vnd.ms-powerpoint", ".ppt"),
            (
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                ".pptx",
            ),
            ("application/vnd.ms-excel", ".xls"),
            (
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                ".xlsx",
            ),
            ("text/plain", ".txt"),
            ("image/jpeg", ".jpg"),
            ("image/png", ".png"),
            ("image/gif", ".gif"),
            ("video/mp4", ".mp4"),
            ("application/zip", ".zip"),
        ];
        for (mime, ext) in cases {
            assert_eq!(extension_for_mime(mime), Some(ext), "{mime}");
        }
    }

    #[test]
    fn test_unknown_mime_has_no_extension() {
        assert_eq!(extension_for_mime("application/octet-stream"), None);
        assert_eq!(extension_for_mime(""), None);
    }

    #[test]
    fn test_mime_parameters_ignored() {
        assert_eq!(extension_for_mime("text/plain; charset=utf-8"), Some(".txt"));
        assert_eq!(extension_for_mime("Image/PNG"), Some(".png"));
    }

    #[test]
    fn test_header_filename_quoted() {
        assert_eq!(
            filename_from_content_disposition(r#"attachment; filename="Lab 3 - Trees.zip""#),
            Some("Lab 3 - Trees.zip".to_string())
        );
    }

    #[test]
    fn test_header_filename_unquoted() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=notes.txt; size=10"),
            Some("notes.txt".to_string())
        );
    }

    #[test]
    fn test_header_without_filename() {
        assert_eq!(filename_from_content_disposition("inline"), None);
        assert_eq!(filename_from_content_disposition(r#"attachment; filename="""#), None);
    }

    #[test]
    fn test_precedence() {
        // Header wins over everything
        assert_eq!(
            resolve_download_filename(
                Some(r#"attachment; filename="server.docx""#),
                "Slides",
                "application/pdf"
            ),
            "server.docx"
        );
        // MIME-derived extension when there is no usable header
        assert_eq!(
            resolve_download_filename(Some("attachment"), "Slides", "video/mp4"),
            "Slides.mp4"
        );
        // Fallback extension for unknown types
        assert_eq!(
            resolve_download_filename(None, "Slides", "application/x-unknown"),
            "Slides.pdf"
        );
    }
}
