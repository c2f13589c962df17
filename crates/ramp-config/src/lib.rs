//! Ramp Studio configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults, so a partial config (or none at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ramp_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("palettes live in {}", config.store.path.display());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::RampStudioConfig;

use ramp_common::ConfigError;
use std::path::Path;

/// Load the config from `path`, or from the platform default location.
///
/// The default file is created from the commented template when missing.
/// An explicit `path` that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<RampStudioConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
