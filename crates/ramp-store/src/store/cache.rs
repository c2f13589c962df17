//! In-memory view of the palette document.

use crate::model::Palette;

use super::LoadReport;

/// Cached result of the last successful load.
///
/// Starts dirty. Every mutating store operation calls [`mark_dirty`] so the
/// next read goes back to disk.
///
/// [`mark_dirty`]: PaletteCache::mark_dirty
#[derive(Debug, Default)]
pub struct PaletteCache {
    entry: Option<CachedDocument>,
}

#[derive(Debug)]
struct CachedDocument {
    palettes: Vec<Palette>,
    report: LoadReport,
}

impl PaletteCache {
    pub fn is_dirty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn mark_dirty(&mut self) {
        self.entry = None;
    }

    pub(crate) fn fill(&mut self, palettes: Vec<Palette>, report: LoadReport) {
        self.entry = Some(CachedDocument { palettes, report });
    }

    /// Cached palettes; empty while dirty.
    pub fn palettes(&self) -> &[Palette] {
        match &self.entry {
            Some(entry) => &entry.palettes,
            None => &[],
        }
    }

    pub fn report(&self) -> LoadReport {
        self.entry.as_ref().map(|e| e.report).unwrap_or_default()
    }
}
