//! Raster preview configuration types.

use serde::{Deserialize, Serialize};

/// Raster preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Largest allowed output dimension; bigger rasters are resampled.
    pub max_dimension: u32,
    /// Sample value meaning "no measurement".
    pub nodata: Option<f64>,
    /// Treat literal zero as no-data. Off by default since zero is
    /// a legitimate elevation.
    pub zero_is_nodata: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1200,
            nodata: None,
            zero_is_nodata: false,
        }
    }
}
