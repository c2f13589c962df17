//! Hex color conversion and the `.clr` color-table format.
//!
//! Two entry points for parsing: [`hex_to_rgb`] is strict and returns a
//! [`ColorError`]; [`hex_to_rgb_or_black`] substitutes black and logs a
//! warning. Every export and rendering path uses the fail-soft form so a
//! single bad color never aborts the whole output.

use ramp_common::{ColorError, Rgb};
use regex::Regex;
use std::fmt::Write as _;
use std::sync::LazyLock;
use tracing::warn;

/// `#RRGGBB` or `#RGB`, leading `#` optional.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap());

/// Validate that a string is a hex color this codec accepts.
pub fn is_valid_hex(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Convert a hex color string to an RGB triple.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let trimmed = hex.trim();
    if !HEX_RE.is_match(trimmed) {
        return Err(ColorError::InvalidColor(hex.to_string()));
    }
    Rgb::from_hex(trimmed).ok_or_else(|| ColorError::InvalidColor(hex.to_string()))
}

/// Like [`hex_to_rgb`], but malformed input becomes black.
pub fn hex_to_rgb_or_black(hex: &str) -> Rgb {
    hex_to_rgb(hex).unwrap_or_else(|e| {
        warn!("{e}, substituting black");
        Rgb::BLACK
    })
}

/// Render colors as a color table: `"<index> <r> <g> <b>\n"` per color,
/// indices starting at 1 in input order.
pub fn to_color_table<S: AsRef<str>>(colors: &[S]) -> String {
    let mut out = String::with_capacity(colors.len() * 16);
    for (idx, hex) in colors.iter().enumerate() {
        let Rgb { r, g, b } = hex_to_rgb_or_black(hex.as_ref());
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {r} {g} {b}", idx + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_accepts_optional_hash() {
        assert_eq!(hex_to_rgb("#00d4ff").unwrap(), Rgb::new(0, 212, 255));
        assert_eq!(hex_to_rgb("00D4FF").unwrap(), Rgb::new(0, 212, 255));
        assert_eq!(hex_to_rgb("  #fff ").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn hex_to_rgb_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "red", "#zzzzzz", "##ffffff"] {
            assert_eq!(
                hex_to_rgb(bad),
                Err(ColorError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn fail_soft_substitutes_black() {
        assert_eq!(hex_to_rgb_or_black("not-a-color"), Rgb::BLACK);
        assert_eq!(hex_to_rgb_or_black("#102030"), Rgb::new(16, 32, 48));
    }

    #[test]
    fn color_table_exact_format() {
        assert_eq!(
            to_color_table(&["#FF0000", "#00FF00"]),
            "1 255 0 0\n2 0 255 0\n"
        );
    }

    #[test]
    fn color_table_index_follows_position() {
        let colors = vec![
            "#000000".to_string(),
            "#808080".to_string(),
            "#ffffff".to_string(),
        ];
        let table = to_color_table(&colors);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["1 0 0 0", "2 128 128 128", "3 255 255 255"]);
    }

    #[test]
    fn color_table_keeps_line_for_bad_color() {
        assert_eq!(to_color_table(&["#ffffff", "oops"]), "1 255 255 255\n2 0 0 0\n");
    }

    #[test]
    fn color_table_of_nothing_is_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(to_color_table(&empty), "");
    }

    #[test]
    fn is_valid_hex_matches_parser() {
        assert!(is_valid_hex("#abcdef"));
        assert!(is_valid_hex("abc"));
        assert!(!is_valid_hex("#abcd"));
    }
}
