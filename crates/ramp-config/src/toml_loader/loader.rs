//! Core TOML config loading: read from path or platform default.

use crate::schema::RampStudioConfig;
use ramp_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation is left to the
/// caller.
pub fn load_from_path(path: &Path) -> Result<RampStudioConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: RampStudioConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/ramp-studio/config.toml`
/// On Linux: `~/.config/ramp-studio/config.toml`
///
/// A missing file is created from the commented template and the defaults
/// are returned without reading it back.
pub fn load_default() -> Result<RampStudioConfig, ConfigError> {
    let path = default_config_path()?;

    if create_default_config(&path)? {
        return Ok(RampStudioConfig::default());
    }

    load_from_path(&path)
}
