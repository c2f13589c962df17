//! Bilinear downsampling to a maximum dimension.
//!
//! Expects a masked grid (no-data already NaN). A sample whose four
//! neighbours are all valid is interpolated; otherwise the nearest
//! neighbour is taken so no-data edges stay crisp instead of bleeding.

use crate::grid::ElevationGrid;
use tracing::debug;

/// Output size that fits `width x height` within `max_dimension`, keeping
/// the aspect ratio. Grids already small enough keep their size.
pub fn fitted_size(width: usize, height: usize, max_dimension: usize) -> (usize, usize) {
    let largest = width.max(height);
    if largest <= max_dimension || max_dimension == 0 {
        return (width, height);
    }
    let scale = max_dimension as f64 / largest as f64;
    let scaled = |n: usize| ((n as f64 * scale).round() as usize).clamp(1, max_dimension);
    (scaled(width), scaled(height))
}

/// Resample so the largest dimension is at most `max_dimension`.
pub fn fit_within(grid: &ElevationGrid, max_dimension: usize) -> ElevationGrid {
    let (width, height) = fitted_size(grid.width(), grid.height(), max_dimension);
    if (width, height) == (grid.width(), grid.height()) {
        return grid.clone();
    }
    debug!(
        from_width = grid.width(),
        from_height = grid.height(),
        width,
        height,
        "downsampling raster"
    );
    bilinear(grid, width, height)
}

fn bilinear(grid: &ElevationGrid, width: usize, height: usize) -> ElevationGrid {
    let x_scale = grid.width() as f64 / width as f64;
    let y_scale = grid.height() as f64 / height as f64;
    let max_x = (grid.width() - 1) as f64;
    let max_y = (grid.height() - 1) as f64;

    let mut values = Vec::with_capacity(width * height);
    for j in 0..height {
        let sy = ((j as f64 + 0.5) * y_scale - 0.5).clamp(0.0, max_y);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(grid.height() - 1);
        let fy = sy - y0 as f64;

        for i in 0..width {
            let sx = ((i as f64 + 0.5) * x_scale - 0.5).clamp(0.0, max_x);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(grid.width() - 1);
            let fx = sx - x0 as f64;

            let (q00, q10) = (grid.get(x0, y0), grid.get(x1, y0));
            let (q01, q11) = (grid.get(x0, y1), grid.get(x1, y1));

            let value = if [q00, q10, q01, q11].iter().all(|v| v.is_finite()) {
                let top = q00 + (q10 - q00) * fx;
                let bottom = q01 + (q11 - q01) * fx;
                top + (bottom - top) * fy
            } else {
                let x = if fx < 0.5 { x0 } else { x1 };
                let y = if fy < 0.5 { y0 } else { y1 };
                grid.get(x, y)
            };
            values.push(value);
        }
    }

    // Dimensions are derived from `values` above, so construction cannot fail.
    ElevationGrid::new(width, height, values).unwrap_or_else(|_| grid.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grids_are_untouched() {
        assert_eq!(fitted_size(100, 50, 1200), (100, 50));
        let grid = ElevationGrid::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(fit_within(&grid, 2), grid);
    }

    #[test]
    fn fitted_size_keeps_aspect_ratio() {
        assert_eq!(fitted_size(4000, 2000, 1000), (1000, 500));
        assert_eq!(fitted_size(1000, 3000, 600), (200, 600));
        assert_eq!(fitted_size(5000, 1, 100), (100, 1));
    }

    #[test]
    fn downsampled_grid_fits_bound() {
        let grid = ElevationGrid::new(40, 10, (0..400).map(f64::from).collect()).unwrap();
        let fitted = fit_within(&grid, 20);
        assert_eq!((fitted.width(), fitted.height()), (20, 5));
    }

    #[test]
    fn halving_a_ramp_averages_neighbours() {
        // Linear in x, so bilinear samples land between source columns.
        let grid = ElevationGrid::new(4, 1, vec![0.0, 10.0, 20.0, 30.0]).unwrap();
        let fitted = fit_within(&grid, 2);
        assert_eq!(fitted.values(), [5.0, 25.0]);
    }

    #[test]
    fn nodata_neighbourhood_uses_nearest_sample() {
        let grid = ElevationGrid::new(4, 1, vec![f64::NAN, 10.0, 20.0, 30.0]).unwrap();
        let fitted = fit_within(&grid, 2);
        // First output sits halfway between NaN and 10.0; nearest rounds up.
        assert_eq!(fitted.get(0, 0), 10.0);
        assert_eq!(fitted.get(1, 0), 25.0);
    }

    #[test]
    fn constant_grid_stays_constant() {
        let grid = ElevationGrid::new(30, 30, vec![7.5; 900]).unwrap();
        let fitted = fit_within(&grid, 16);
        assert!(fitted.values().iter().all(|&v| v == 7.5));
    }
}
