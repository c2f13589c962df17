//! The on-disk palette store.
//!
//! Reads are served from a [`PaletteCache`]; `save` and `delete` rewrite the
//! whole document and mark the cache dirty, so the next read reflects the
//! write. A missing document loads as an empty list.

mod cache;
mod document;
mod persist;


pub use cache::PaletteCache;

use crate::model::Palette;
use ramp_common::StoreError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Aggregate counts of what the last load skipped or repaired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records missing `name` or `colors`, or not objects at all.
    pub invalid_records: usize,
    /// Later records whose name was already taken.
    pub duplicate_names: usize,
    /// Color strings that are not valid hex (rendered as black).
    pub invalid_colors: usize,
}

impl LoadReport {
    /// One-line user notice, `None` when nothing was skipped.
    pub fn notice(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.invalid_records > 0 {
            parts.push(format!("{} invalid records skipped", self.invalid_records));
        }
        if self.duplicate_names > 0 {
            parts.push(format!("{} duplicate names dropped", self.duplicate_names));
        }
        if self.invalid_colors > 0 {
            parts.push(format!("{} malformed colors shown as black", self.invalid_colors));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Raw document bytes captured before a mutation, `None` if the file did
/// not exist.
#[derive(Debug, Clone)]
pub struct Snapshot(Option<Vec<u8>>);

pub struct PaletteStore {
    path: PathBuf,
    cache: PaletteCache,
}

impl PaletteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: PaletteCache::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Palettes in document order, read from disk only when the cache is dirty.
    pub fn load(&mut self) -> Result<&[Palette], StoreError> {
        if self.cache.is_dirty() {
            let (palettes, report) = self.read_document()?;
            if let Some(notice) = report.notice() {
                warn!(path = %self.path.display(), "{notice}");
            }
            info!(
                path = %self.path.display(),
                count = palettes.len(),
                "loaded palettes"
            );
            self.cache.fill(palettes, report);
        } else {
            debug!(path = %self.path.display(), "palette cache hit");
        }
        Ok(self.cache.palettes())
    }

    /// Drop the cached view and read the document again.
    pub fn reload(&mut self) -> Result<&[Palette], StoreError> {
        self.cache.mark_dirty();
        self.load()
    }

    /// Counts from the last successful load.
    pub fn last_report(&self) -> LoadReport {
        self.cache.report()
    }

    /// Replace the whole document with `palettes`.
    ///
    /// On failure the cache is left as it was.
    pub fn save(&mut self, palettes: &[Palette]) -> Result<(), StoreError> {
        let json = persist::serialize(palettes)?;
        persist::write_atomic(&self.path, json.as_bytes())?;
        self.cache.mark_dirty();
        info!(path = %self.path.display(), count = palettes.len(), "saved palettes");
        Ok(())
    }

    /// Remove the palette called `name` and persist the result.
    ///
    /// Returns the new list. An unknown name is a no-op: nothing is written
    /// and the current list comes back unchanged.
    pub fn delete(&mut self, name: &str) -> Result<Vec<Palette>, StoreError> {
        let mut palettes = self.load()?.to_vec();
        let Some(index) = palettes.iter().position(|p| p.name == name) else {
            debug!(name, "delete of unknown palette ignored");
            return Ok(palettes);
        };

        palettes.remove(index);
        self.save(&palettes)?;
        info!(name, "deleted palette");
        Ok(palettes)
    }

    /// Capture the document bytes so a later mutation can be undone.
    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        persist::read_bytes(&self.path).map(Snapshot)
    }

    /// Put the document back exactly as captured.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), StoreError> {
        match snapshot.0 {
            Some(bytes) => persist::write_atomic(&self.path, &bytes)?,
            None => persist::remove(&self.path)?,
        }
        self.cache.mark_dirty();
        info!(path = %self.path.display(), "restored palette document");
        Ok(())
    }

    fn read_document(&self) -> Result<(Vec<Palette>, LoadReport), StoreError> {
        let Some(bytes) = persist::read_bytes(&self.path)? else {
            info!(path = %self.path.display(), "no palette document, starting empty");
            return Ok((Vec::new(), LoadReport::default()));
        };
        let text = String::from_utf8(bytes).map_err(|e| StoreError::Shape {
            path: self.path.clone(),
            message: format!("document is not valid UTF-8: {e}"),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        document::parse_document(&self.path, text)
    }
}
