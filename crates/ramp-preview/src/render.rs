//! Colorizing a grid into a preview image.

use crate::gradient::Gradient;
use crate::grid::{ElevationGrid, NoDataPolicy};
use crate::resample;
use image::{ImageFormat, Rgba, RgbaImage};
use ramp_common::RenderError;
use std::path::Path;
use tracing::{debug, info};

/// Largest preview dimension when none is configured.
pub const DEFAULT_MAX_DIMENSION: u32 = 1200;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewRenderer {
    max_dimension: u32,
    nodata: NoDataPolicy,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION, NoDataPolicy::default())
    }
}

impl PreviewRenderer {
    pub fn new(max_dimension: u32, nodata: NoDataPolicy) -> Self {
        Self {
            max_dimension: max_dimension.max(1),
            nodata,
        }
    }

    /// Map every valid sample through the gradient built from `colors`.
    ///
    /// The value range comes from the full-resolution grid, so downsampling
    /// does not shift the color scale. No-data pixels are fully transparent.
    pub fn render<S: AsRef<str>>(
        &self,
        grid: &ElevationGrid,
        colors: &[S],
    ) -> Result<RgbaImage, RenderError> {
        let gradient = Gradient::from_hex(colors)?;
        let masked = grid.masked(&self.nodata);
        let (min, max) = masked.value_range().ok_or(RenderError::AllNoData)?;
        let span = max - min;
        debug!(min, max, "raster value range");

        let fitted = resample::fit_within(&masked, self.max_dimension as usize);
        let mut image = RgbaImage::new(fitted.width() as u32, fitted.height() as u32);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let value = fitted.get(x as usize, y as usize);
            *pixel = if value.is_finite() {
                let t = if span > 0.0 { (value - min) / span } else { 0.0 };
                let c = gradient.at(t);
                Rgba([c.r, c.g, c.b, 255])
            } else {
                TRANSPARENT
            };
        }

        info!(
            width = image.width(),
            height = image.height(),
            "rendered preview"
        );
        Ok(image)
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
