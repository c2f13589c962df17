//! Continuous color gradient through an ordered list of stops.

use ramp_common::{RenderError, Rgb};
use ramp_store::codec;

/// Evenly spaced color stops, interpolated linearly in RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    /// Needs at least two colors. Malformed hex stops become black.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, RenderError> {
        if colors.len() < 2 {
            return Err(RenderError::TooFewColors(colors.len()));
        }
        let stops = colors
            .iter()
            .map(|c| codec::hex_to_rgb_or_black(c.as_ref()))
            .collect();
        Ok(Self { stops })
    }

    /// Color at position `t` in `[0, 1]`; out-of-range `t` is clamped.
    pub fn at(&self, t: f64) -> Rgb {
        let segments = self.stops.len() - 1;
        let pos = t.clamp(0.0, 1.0) * segments as f64;
        let index = (pos.floor() as usize).min(segments - 1);
        self.stops[index].lerp(self.stops[index + 1], pos - index as f64)
    }
}
