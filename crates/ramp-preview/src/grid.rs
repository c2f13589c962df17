//! Row-major elevation samples plus no-data handling.

use ramp_common::RenderError;

/// Which samples count as "no measurement".
///
/// NaN and infinities are always no-data. Literal zero is only excluded when
/// `zero_is_nodata` is set, since zero is a real elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoDataPolicy {
    pub sentinel: Option<f64>,
    pub zero_is_nodata: bool,
}

impl NoDataPolicy {
    fn excludes(&self, value: f64, grid_sentinel: Option<f64>) -> bool {
        !value.is_finite()
            || self.sentinel == Some(value)
            || grid_sentinel == Some(value)
            || (self.zero_is_nodata && value == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
    /// Sentinel declared by the raster source itself.
    nodata: Option<f64>,
}

impl ElevationGrid {
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Empty);
        }
        let expected = width
            .checked_mul(height)
            .ok_or(RenderError::TooLarge { width, height })?;
        if values.len() != expected {
            return Err(RenderError::DimensionMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
            nodata: None,
        })
    }

    /// Build from rows; every row must have the first row's length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RenderError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(RenderError::DimensionMismatch {
                expected: width,
                found: bad.len(),
            });
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    /// Copy with every excluded sample replaced by NaN.
    pub fn masked(&self, policy: &NoDataPolicy) -> ElevationGrid {
        let values = self
            .values
            .iter()
            .map(|&v| if policy.excludes(v, self.nodata) { f64::NAN } else { v })
            .collect();
        ElevationGrid {
            width: self.width,
            height: self.height,
            values,
            nodata: None,
        }
    }

    /// Min and max over finite samples; `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_sample_count() {
        let err = ElevationGrid::new(3, 2, vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::DimensionMismatch {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(matches!(
            ElevationGrid::new(0, 4, vec![]),
            Err(RenderError::Empty)
        ));
        assert!(matches!(
            ElevationGrid::from_rows(vec![]),
            Err(RenderError::Empty)
        ));
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = ElevationGrid::new(usize::MAX, 2, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = ElevationGrid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, RenderError::DimensionMismatch { .. }));
    }

    #[test]
    fn get_is_row_major() {
        let grid = ElevationGrid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(grid.get(2, 0), 3.0);
        assert_eq!(grid.get(0, 1), 4.0);
    }

    #[test]
    fn zero_is_kept_by_default() {
        let grid = ElevationGrid::new(3, 1, vec![0.0, 5.0, -9999.0])
            .unwrap()
            .with_nodata(Some(-9999.0));
        let masked = grid.masked(&NoDataPolicy::default());
        assert_eq!(masked.get(0, 0), 0.0);
        assert!(masked.get(2, 0).is_nan());
        assert_eq!(masked.value_range(), Some((0.0, 5.0)));
    }

    #[test]
    fn zero_can_be_opted_out() {
        let grid = ElevationGrid::new(2, 1, vec![0.0, 5.0]).unwrap();
        let policy = NoDataPolicy {
            sentinel: None,
            zero_is_nodata: true,
        };
        assert!(grid.masked(&policy).get(0, 0).is_nan());
    }

    #[test]
    fn configured_sentinel_and_non_finite_are_masked() {
        let grid = ElevationGrid::new(4, 1, vec![-1.0, f64::INFINITY, f64::NAN, 2.0]).unwrap();
        let policy = NoDataPolicy {
            sentinel: Some(-1.0),
            zero_is_nodata: false,
        };
        let masked = grid.masked(&policy);
        assert_eq!(masked.value_range(), Some((2.0, 2.0)));
    }

    #[test]
    fn value_range_of_all_nodata_is_none() {
        let grid = ElevationGrid::new(2, 1, vec![f64::NAN, f64::NAN]).unwrap();
        assert_eq!(grid.value_range(), None);
    }
}
