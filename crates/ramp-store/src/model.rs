//! The palette record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category assigned to records that do not declare one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A named, ordered list of colors.
///
/// Field order here is the key order written to disk. Keys the store does
/// not know about are kept in `extra` so a rewrite does not lose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub colors: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            tags: Vec::new(),
            colors,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
