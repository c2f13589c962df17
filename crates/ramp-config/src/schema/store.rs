//! Palette store configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the palette JSON document lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("palettes.json"),
        }
    }
}
