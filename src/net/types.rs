//! Project record schema shared by the data island and `projects.json`.
//!
//! DESIGN
//! ======
//! Every field is optional on the wire. Absent and blank strings are treated
//! alike so a half-filled record still renders instead of failing the list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One portfolio item. Identified only by its position in the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    pub short: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
}

impl Project {
    /// One-line summary shown in the list, empty when absent.
    pub fn short(&self) -> &str {
        non_blank(self.short.as_deref()).unwrap_or("")
    }

    /// Long-form text for the modal: description, then short, then empty.
    pub fn summary(&self) -> &str {
        non_blank(self.description.as_deref())
            .or_else(|| non_blank(self.short.as_deref()))
            .unwrap_or("")
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }

    pub fn link(&self) -> Option<&str> {
        non_blank(self.link.as_deref())
    }
}

/// `null` reads as an empty string; a missing key is covered by `default`.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse a JSON array of project records.
///
/// # Errors
///
/// Returns the `serde_json` error when the payload is not an array of
/// objects with string fields.
pub fn parse_projects(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}
