//! Loading elevation rasters from disk.
//!
//! `.asc` files are parsed as ESRI ASCII grids. Anything else goes through
//! the `image` crate: float images (the usual GeoTIFF DEM) keep their raw
//! first channel as elevation, integer images use 16-bit luminance.

use crate::grid::ElevationGrid;
use image::DynamicImage;
use ramp_common::RenderError;
use std::path::Path;
use tracing::info;

pub fn read_raster(path: &Path) -> Result<ElevationGrid, RenderError> {
    let is_ascii_grid = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("asc"));

    let grid = if is_ascii_grid {
        let text = std::fs::read_to_string(path).map_err(|e| decode_err(path, e))?;
        parse_ascii_grid(path, &text)?
    } else {
        read_image(path)?
    };

    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "read raster"
    );
    Ok(grid)
}

fn read_image(path: &Path) -> Result<ElevationGrid, RenderError> {
    let image = image::open(path).map_err(|e| decode_err(path, e))?;
    let (width, height) = (image.width() as usize, image.height() as usize);
    let values: Vec<f64> = match image {
        // Scaling floats into luma would clamp every elevation above 1.0.
        DynamicImage::ImageRgb32F(buf) => buf.pixels().map(|p| f64::from(p.0[0])).collect(),
        DynamicImage::ImageRgba32F(buf) => buf.pixels().map(|p| f64::from(p.0[0])).collect(),
        other => other
            .to_luma16()
            .into_raw()
            .into_iter()
            .map(f64::from)
            .collect(),
    };
    ElevationGrid::new(width, height, values)
}

/// Parse an ESRI ASCII grid.
///
/// Header lines are `key value` pairs starting with a letter; `ncols` and
/// `nrows` are required, `nodata_value` is honoured, georeferencing keys
/// are ignored. Samples follow in row-major order, whitespace separated.
pub fn parse_ascii_grid(path: &Path, text: &str) -> Result<ElevationGrid, RenderError> {
    let mut ncols: Option<usize> = None;
    let mut nrows: Option<usize> = None;
    let mut nodata: Option<f64> = None;

    let mut lines = text.lines().peekable();
    while let Some(&line) = lines.peek() {
        let mut parts = line.split_whitespace();
        let Some(key) = parts.next() else {
            lines.next();
            continue;
        };
        if !key.starts_with(|c: char| c.is_ascii_alphabetic()) {
            break;
        }
        let value = parts
            .next()
            .ok_or_else(|| decode_err(path, format!("header {key} has no value")))?;
        match key.to_ascii_lowercase().as_str() {
            "ncols" => ncols = Some(parse_header(path, key, value)?),
            "nrows" => nrows = Some(parse_header(path, key, value)?),
            "nodata_value" => nodata = Some(parse_header(path, key, value)?),
            _ => {}
        }
        lines.next();
    }

    let ncols = ncols.ok_or_else(|| decode_err(path, "missing ncols header"))?;
    let nrows = nrows.ok_or_else(|| decode_err(path, "missing nrows header"))?;

    let values = lines
        .flat_map(str::split_whitespace)
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| decode_err(path, format!("invalid sample {token:?}")))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(ElevationGrid::new(ncols, nrows, values)?.with_nodata(nodata))
}

fn parse_header<T: std::str::FromStr>(path: &Path, key: &str, value: &str) -> Result<T, RenderError> {
    value
        .parse()
        .map_err(|_| decode_err(path, format!("invalid {key} value {value:?}")))
}

fn decode_err(path: &Path, message: impl std::fmt::Display) -> RenderError {
    RenderError::Decode {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
