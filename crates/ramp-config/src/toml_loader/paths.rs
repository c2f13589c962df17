//! Where the config lives and how the first-run file is written.

use ramp_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "ramp-studio";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/ramp-studio/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns `true` when the template was written. An existing file is never
/// touched, even if another process created it a moment ago.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let io_err = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", at.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_err("cannot create config directory", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, leaving it alone");
            return Ok(false);
        }
        Err(e) => return Err(io_err("cannot create config", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("cannot write config template to", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(true)
}
