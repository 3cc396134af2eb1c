use dioxus::html::FileData;
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use syllabus_core::SelectedFile;

/// Reads a picked or dropped file into memory.
pub async fn read_selected(file: FileData) -> Option<SelectedFile> {
    let name = file.name().to_string();
    let content_type = file.content_type();

    match file.read_bytes().await {
        Ok(bytes) => Some(SelectedFile::new(name, content_type, bytes.to_vec())),
        Err(e) => {
            error!("Failed to read {}: {}", name, e);
            None
        }
    }
}

/// Resets a file `<input>` so the same file can be picked again.
pub fn clear_file_input(id: &str) {
    let eval = document::eval(&clear_input_script(id));
    let id = id.to_string();
    spawn(async move {
        if let Err(e) = eval.await {
            warn!("Failed to clear file input {}: {:?}", id, e);
        }
    });
}

fn clear_input_script(id: &str) -> String {
    format!("const el = document.getElementById('{id}'); if (el) {{ el.value = ''; }} return null;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_script_targets_input_and_completes() {
        let script = clear_input_script("sy-file-upload");
        assert!(script.contains("getElementById('sy-file-upload')"));
        assert!(script.contains("el.value = ''"));
        assert!(script.ends_with("return null;"));
    }
}
