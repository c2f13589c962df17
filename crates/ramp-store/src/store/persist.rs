//! Raw file access for the palette document.
//!
//! Writes are whole-document replaces: write to a `.tmp` sibling, then
//! rename over the original.

use crate::model::Palette;
use ramp_common::StoreError;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read the document, `None` if the file does not exist.
pub(crate) fn read_bytes(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pretty-printed JSON, stable key order, non-ASCII left unescaped.
pub(crate) fn serialize(palettes: &[Palette]) -> Result<String, StoreError> {
    let mut json =
        serde_json::to_string_pretty(palettes).map_err(|e| StoreError::Serialize(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let write_err = |path: &Path, source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    let tmp_path = tmp_path(path);
    std::fs::write(&tmp_path, bytes).map_err(|e| write_err(&tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, bytes).map_err(|e| write_err(path, e))?;
    }

    debug!(path = %path.display(), bytes = bytes.len(), "palette document written");
    Ok(())
}

pub(crate) fn remove(path: &Path) -> Result<(), StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
