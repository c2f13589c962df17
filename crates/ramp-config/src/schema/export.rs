//! Export configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file names and locations for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name of the bulk JSON bundle.
    pub bundle_file_name: String,
    /// Directory for batch `.clr` exports.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bundle_file_name: "gis_color_package.json".into(),
            output_dir: PathBuf::from("Color_Ramps_Output"),
        }
    }
}
