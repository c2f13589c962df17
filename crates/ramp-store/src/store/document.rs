//! Parsing and normalization of the palette JSON document.
//!
//! The root must be an array. Elements that are themselves arrays are
//! flattened one level. Each remaining element must be an object with a
//! non-empty `name` and a non-empty `colors` list; anything else is counted
//! as invalid and skipped. Duplicate names keep the first occurrence.

use crate::codec;
use crate::model::{Palette, DEFAULT_CATEGORY};
use ramp_common::StoreError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

use super::LoadReport;

/// Lenient view of one record; every field optional so shape problems
/// surface as skips instead of whole-document failures.
#[derive(Deserialize)]
struct RawPalette {
    name: Option<String>,
    category: Option<String>,
    tags: Option<Vec<String>>,
    colors: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

pub(crate) fn parse_document(
    path: &Path,
    text: &str,
) -> Result<(Vec<Palette>, LoadReport), StoreError> {
    let root: Value = serde_json::from_str(text).map_err(|e| syntax_error(path, text, &e))?;

    let Value::Array(entries) = root else {
        return Err(StoreError::Shape {
            path: path.to_path_buf(),
            message: format!("expected an array at the root, found {}", kind(&root)),
        });
    };

    let mut report = LoadReport::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut palettes = Vec::with_capacity(entries.len());

    let flattened = entries.into_iter().flat_map(|entry| match entry {
        Value::Array(inner) => inner,
        other => vec![other],
    });

    for value in flattened {
        let Some(palette) = normalize(value) else {
            report.invalid_records += 1;
            continue;
        };
        if !seen.insert(palette.name.clone()) {
            warn!(name = %palette.name, "duplicate palette name, keeping the first occurrence");
            report.duplicate_names += 1;
            continue;
        }
        let bad_colors = palette
            .colors
            .iter()
            .filter(|c| !codec::is_valid_hex(c))
            .count();
        if bad_colors > 0 {
            warn!(name = %palette.name, bad_colors, "palette has malformed colors");
            report.invalid_colors += bad_colors;
        }
        palettes.push(palette);
    }

    Ok((palettes, report))
}

fn normalize(value: Value) -> Option<Palette> {
    let raw: RawPalette = serde_json::from_value(value).ok()?;
    let name = raw.name.filter(|n| !n.trim().is_empty())?;
    let colors = raw.colors.filter(|c| !c.is_empty())?;
    let category = raw
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    Some(Palette {
        name,
        category,
        tags: raw.tags.unwrap_or_default(),
        colors,
        extra: raw.extra,
    })
}

fn syntax_error(path: &Path, text: &str, err: &serde_json::Error) -> StoreError {
    let line = err.line();
    let context = line
        .checked_sub(1)
        .and_then(|idx| text.lines().nth(idx))
        .unwrap_or_default()
        .to_string();
    // serde_json appends " at line L column C" to its message; the position
    // is reported separately.
    let message = err.to_string();
    let message = message
        .rsplit_once(" at line ")
        .map_or(message.as_str(), |(head, _)| head)
        .to_string();

    StoreError::Syntax {
        path: path.to_path_buf(),
        line,
        column: err.column(),
        context,
        message,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
