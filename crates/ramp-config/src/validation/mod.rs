//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::RampStudioConfig;
use ramp_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RampStudioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_store(&mut errors, config);
    sections::validate_export(&mut errors, config);
    sections::validate_preview(&mut errors, config);
    sections::validate_sync(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
