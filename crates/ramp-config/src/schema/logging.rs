//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Default log verbosity when neither `RUST_LOG` nor `--log-level` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
