//! Per-section validators.

use crate::schema::RampStudioConfig;

use super::helpers::{validate_non_empty, validate_range};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_store(errors: &mut Vec<String>, config: &RampStudioConfig) {
    validate_non_empty(errors, "store.path", &config.store.path.to_string_lossy());
}

pub(crate) fn validate_export(errors: &mut Vec<String>, config: &RampStudioConfig) {
    validate_non_empty(errors, "export.bundle_file_name", &config.export.bundle_file_name);
    validate_non_empty(
        errors,
        "export.output_dir",
        &config.export.output_dir.to_string_lossy(),
    );
}

pub(crate) fn validate_preview(errors: &mut Vec<String>, config: &RampStudioConfig) {
    validate_range(
        errors,
        "preview.max_dimension",
        config.preview.max_dimension,
        16,
        8192,
    );
    if let Some(nodata) = config.preview.nodata {
        if !nodata.is_finite() {
            errors.push(format!("preview.nodata = {nodata} must be a finite number"));
        }
    }
}

pub(crate) fn validate_sync(errors: &mut Vec<String>, config: &RampStudioConfig) {
    if let Some(command) = &config.sync.command {
        match command.first() {
            None => errors.push("sync.command must not be an empty list".into()),
            Some(program) => validate_non_empty(errors, "sync.command[0]", program),
        }
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &RampStudioConfig) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
