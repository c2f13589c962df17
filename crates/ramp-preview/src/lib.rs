//! Raster preview rendering.
//!
//! Applies a palette's colors as a continuous gradient over an elevation
//! grid and produces a bounded-size RGBA thumbnail. Previews are for display
//! only; nothing downstream reads the pixel values back.

pub mod gradient;
pub mod grid;
pub mod reader;
pub mod render;
pub mod resample;

pub use gradient::Gradient;
pub use grid::{ElevationGrid, NoDataPolicy};
pub use reader::read_raster;
pub use render::{save_png, PreviewRenderer, DEFAULT_MAX_DIMENSION};
