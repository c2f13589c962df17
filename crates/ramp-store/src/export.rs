//! Bulk JSON bundles and `.clr` color-table files.

use crate::codec;
use crate::model::Palette;
use crate::selection::Selection;
use ramp_common::StoreError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Selected palettes in store order.
///
/// Selection order is deliberately ignored: the bundle lists palettes the
/// way the document does.
pub fn export_selection<'a>(all: &'a [Palette], selection: &Selection) -> Vec<&'a Palette> {
    all.iter().filter(|p| selection.contains(&p.name)).collect()
}

/// Pretty-printed JSON array of full palette records.
pub fn bundle_json(palettes: &[&Palette]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(palettes).map_err(|e| StoreError::Serialize(e.to_string()))
}

pub fn write_bundle(path: &Path, palettes: &[&Palette]) -> Result<(), StoreError> {
    let json = bundle_json(palettes)?;
    std::fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = palettes.len(), "wrote palette bundle");
    Ok(())
}

/// Download name for a single palette's color table: the safe form of the
/// name with spaces turned into underscores.
pub fn clr_file_name(name: &str) -> String {
    format!("{}.clr", safe_component(name).replace(' ', "_"))
}

/// Batch file name: `<category>_<safe name>.clr`.
pub fn batch_clr_file_name(palette: &Palette) -> String {
    format!(
        "{}_{}.clr",
        safe_component(&palette.category),
        safe_component(&palette.name)
    )
}

/// Write one color table per palette into `dir`, creating it if needed.
///
/// Names that sanitize to the same file get a numeric suffix rather than
/// overwriting each other. Returns the written paths in input order.
pub fn write_color_tables(dir: &Path, palettes: &[&Palette]) -> Result<Vec<PathBuf>, StoreError> {
    let write_err = |path: &Path, source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(|e| write_err(dir, e))?;

    let mut used: HashSet<String> = HashSet::new();
    let mut written = Vec::with_capacity(palettes.len());
    for palette in palettes {
        let file_name = unique_name(&mut used, batch_clr_file_name(palette));
        let path = dir.join(file_name);
        std::fs::write(&path, codec::to_color_table(&palette.colors))
            .map_err(|e| write_err(&path, e))?;
        written.push(path);
    }

    info!(dir = %dir.display(), count = written.len(), "wrote color tables");
    Ok(written)
}

fn safe_component(s: &str) -> String {
    let kept: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let kept = kept.trim();
    if kept.is_empty() {
        "unnamed".to_string()
    } else {
        kept.to_string()
    }
}

fn unique_name(used: &mut HashSet<String>, candidate: String) -> String {
    if used.insert(candidate.clone()) {
        return candidate;
    }
    let stem = candidate.trim_end_matches(".clr");
    let mut n = 2;
    loop {
        let next = format!("{stem}_{n}.clr");
        if used.insert(next.clone()) {
            return next;
        }
        n += 1;
    }
}
