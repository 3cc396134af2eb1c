//! Material records as returned by the `/materials` API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed two-value classification of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Theory,
    Lab,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Theory, Category::Lab];

    /// Wire value, also used as the `<option>` value in forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Theory => "theory",
            Category::Lab => "lab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Theory => "Theory",
            Category::Lab => "Lab",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theory" => Ok(Category::Theory),
            "lab" => Ok(Category::Lab),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A single uploaded file plus its descriptive metadata.
///
/// The identifier is assigned by the server on creation and never changes.
/// Every optional field may be absent or `null` in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Material {
    /// Description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Topic, if present and not blank.
    pub fn topic(&self) -> Option<&str> {
        non_blank(self.topic.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_page() -> u32 {
    1
}

/// One page of the material listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPage {
    #[serde(default)]
    pub total: usize,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    pub materials: Vec<Material>,
}

impl Default for MaterialPage {
    fn default() -> Self {
        Self {
            total: 0,
            page: first_page(),
            page_size: 0,
            materials: Vec::new(),
        }
    }
}

impl MaterialPage {
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Number of pages the server reports, at least 1.
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.page_size as usize);
        pages.max(1) as u32
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("seminar".parse::<Category>().is_err());
    }

    #[test]
    fn test_material_tolerates_missing_optionals() {
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "title": "Intro to Sorting",
            "category": "lab",
            "week": null,
            "tags": null,
            "file_type": "application/pdf",
            "created_at": "2025-02-10T09:30:00"
        }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.category, Category::Lab);
        assert_eq!(material.week, None);
        assert!(material.tags.is_empty());
        assert_eq!(material.description(), None);
        assert_eq!(material.topic(), None);
        assert_eq!(material.created_at, "2025-02-10T09:30:00");
    }

    #[test]
    fn test_blank_description_is_hidden() {
        let material = Material {
            id: "1".into(),
            title: "Notes".into(),
            description: Some("   ".into()),
            category: Category::Theory,
            week: Some(3),
            topic: Some("Graphs".into()),
            tags: vec![],
            file_type: String::new(),
            created_at: "yesterday".into(),
            updated_at: None,
        };
        assert_eq!(material.description(), None);
        assert_eq!(material.topic(), Some("Graphs"));
    }

    #[test]
    fn test_page_navigation() {
        let page = MaterialPage {
            total: 45,
            page: 2,
            page_size: 20,
            materials: vec![],
        };
        assert_eq!(page.page_count(), 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let empty = MaterialPage::default();
        assert_eq!(empty.page_count(), 1);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_page_defaults_when_fields_absent() {
        let page: MaterialPage = serde_json::from_str(r#"{"materials": []}"#).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 0);
        assert!(page.is_empty());
    }
}
