//! Form drafts for the upload and edit views.
//!
//! A [`MaterialDraft`] holds exactly what the user typed. Week and tags stay
//! strings until submission; only then are they validated and converted into
//! an [`UploadRequest`] (multipart) or a [`MaterialUpdate`] (JSON).

use crate::error::DraftError;
use crate::material::{Category, Material};
use serde::Serialize;

/// Splits a comma-separated tag string into trimmed, non-empty tags.
///
/// ```
/// use syllabus_core::parse_tags;
///
/// assert_eq!(parse_tags("a, b, c"), vec!["a", "b", "c"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags for display in a text input.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// A file chosen through the picker or dropped onto the upload zone.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.filter(|ct| !ct.is_empty()),
            bytes,
        }
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / 1024.0 / 1024.0)
    }
}

/// Editable material fields as typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub week: String,
    pub topic: String,
    /// Comma-separated; split only at submission time.
    pub tags: String,
}

impl MaterialDraft {
    /// Pre-populates a draft from an existing record.
    pub fn from_material(material: &Material) -> Self {
        Self {
            title: material.title.clone(),
            description: material.description.clone().unwrap_or_default(),
            category: material.category,
            week: material.week.map(|w| w.to_string()).unwrap_or_default(),
            topic: material.topic.clone().unwrap_or_default(),
            tags: join_tags(&material.tags),
        }
    }

    /// Week as a positive integer, or `None` when left blank.
    pub fn parsed_week(&self) -> Result<Option<u32>, DraftError> {
        let week = self.week.trim();
        if week.is_empty() {
            return Ok(None);
        }
        match week.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(DraftError::InvalidWeek(week.to_string())),
        }
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    fn topic_or_none(&self) -> Option<String> {
        let topic = self.topic.trim();
        (!topic.is_empty()).then(|| topic.to_string())
    }

    fn checked_title(&self) -> Result<String, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        Ok(title.to_string())
    }

    /// Builds the metadata-only update sent by the edit view.
    pub fn to_update(&self) -> Result<MaterialUpdate, DraftError> {
        Ok(MaterialUpdate {
            title: self.checked_title()?,
            description: self.description.clone(),
            category: self.category,
            week: self.parsed_week()?,
            topic: self.topic_or_none(),
            tags: self.parsed_tags(),
        })
    }

    /// Builds the multipart upload for `file`.
    ///
    /// The file check comes first so a missing file is reported even when
    /// other fields are also incomplete.
    pub fn to_upload(&self, file: Option<&SelectedFile>) -> Result<UploadRequest, DraftError> {
        let file = file.ok_or(DraftError::MissingFile)?;
        let tags = self.parsed_tags();

        Ok(UploadRequest {
            file: file.clone(),
            title: self.checked_title()?,
            description: self.description.clone(),
            category: self.category,
            week: self.parsed_week()?,
            topic: self.topic_or_none(),
            tags: (!tags.is_empty()).then(|| tags.join(",")),
        })
    }
}

/// JSON body of `PUT /materials/{id}`.
///
/// `week` and `topic` serialize as `null` when absent so the server clears them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialUpdate {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub week: Option<u32>,
    pub topic: Option<String>,
    pub tags: Vec<String>,
}

/// Multipart body of `POST /materials/upload`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub week: Option<u32>,
    pub topic: Option<String>,
    /// Comma-separated, as the upload endpoint expects.
    pub tags: Option<String>,
}

impl UploadRequest {
    /// Text parts in submission order. Blank optional fields are left out
    /// entirely rather than sent empty.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("category", self.category.as_str().to_string()),
        ];
        if let Some(week) = self.week {
            fields.push(("week", week.to_string()));
        }
        if let Some(topic) = &self.topic {
            fields.push(("topic", topic.clone()));
        }
        if let Some(tags) = &self.tags {
            fields.push(("tags", tags.clone()));
        }
        fields
    }
}
