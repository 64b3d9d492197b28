//! Color space conversions between hex, RGB and HSB
//!
//! Hex strings (`#RRGGBB`) are the canonical form. RGB and HSB values are
//! transient: they are always recomputed from hex and discarded once a color
//! has been converted back.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// 8-bit sRGB triple.
pub type Rgb = Srgb<u8>;

/// Errors reported by the strict hex parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length in '{0}' (expected 6 digits)")]
    InvalidLength(String),
    #[error("invalid hex digits in '{0}'")]
    InvalidDigit(String),
}

/// Hue (degrees), saturation and brightness (percent), all integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsb {
    pub h: i32,
    pub s: i32,
    pub b: i32,
}

impl Hsb {
    pub fn new(h: i32, s: i32, b: i32) -> Self {
        Self { h, s, b }
    }
}

impl std::fmt::Display for Hsb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsb({}, {}%, {}%)", self.h, self.s, self.b)
    }
}

pub fn black() -> Rgb {
    Srgb::new(0, 0, 0)
}

/// JavaScript-style rounding: halves go towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Strictly parse `#RRGGBB` or `RRGGBB` (any case).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    if hex.is_empty() {
        return Err(ColorError::Empty);
    }

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(hex.to_string()));
    }
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
    };

    Ok(Srgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a hex color, falling back to black for malformed input.
///
/// Callers that cannot accept the silent fallback should use [`parse_hex`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_else(|e| {
        debug!(%e, "malformed hex color, using black");
        black()
    })
}

/// Format as canonical uppercase `#RRGGBB`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Validate and convert to canonical uppercase `#RRGGBB`.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    parse_hex(hex).map(rgb_to_hex)
}

/// True only for the full `#RRGGBB` form (leading `#` required, any case).
pub fn is_valid_hex(hex: &str) -> bool {
    hex.len() == 7 && hex.starts_with('#') && parse_hex(hex).is_ok()
}

pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let rgb: Srgb<f64> = rgb.into_format();
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = 0;
    if delta != 0.0 {
        let sector = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h = (round_half_up(sector * 60.0) as i32).rem_euclid(360);
    }

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsb {
        h,
        s: round_half_up(s * 100.0) as i32,
        b: round_half_up(max * 100.0) as i32,
    }
}

/// Convert a hex color to HSB. Malformed hex converts as black.
pub fn hex_to_hsb(hex: &str) -> Hsb {
    rgb_to_hsb(hex_to_rgb(hex))
}

/// HSB to RGB. Hue is taken modulo 360; saturation and brightness are
/// clamped to 0..=100.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let h = f64::from(hsb.h.rem_euclid(360));
    let s = f64::from(hsb.s.clamp(0, 100)) / 100.0;
    let v = f64::from(hsb.b.clamp(0, 100)) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 60.0) % 6.0;
        let f = v * (1.0 - s * k.min(4.0 - k).min(1.0).clamp(0.0, 1.0));
        round_half_up(f * 255.0).clamp(0.0, 255.0) as u8
    };

    Srgb::new(channel(5.0), channel(3.0), channel(1.0))
}

pub fn hsb_to_hex(hsb: Hsb) -> String {
    rgb_to_hex(hsb_to_rgb(hsb))
}

/// Euclidean distance in raw 8-bit RGB space.
pub fn calculate_color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.red) - f64::from(b.red);
    let dg = f64::from(a.green) - f64::from(b.green);
    let db = f64::from(a.blue) - f64::from(b.blue);
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    // hex -> HSB -> hex error with integer HSB components
    const ROUND_TRIP_TOLERANCE: i32 = 3;

    fn channel_error(a: Rgb, b: Rgb) -> i32 {
        let dr = (i32::from(a.red) - i32::from(b.red)).abs();
        let dg = (i32::from(a.green) - i32::from(b.green)).abs();
        let db = (i32::from(a.blue) - i32::from(b.blue)).abs();
        dr.max(dg).max(db)
    }

    // --- hex <-> RGB ---

    #[test]
    fn test_hex_to_rgb_known_value() {
        assert_eq!(hex_to_rgb("#FF5733"), Srgb::new(255, 87, 51));
    }

    #[test]
    fn test_hex_to_rgb_case_and_prefix() {
        assert_eq!(hex_to_rgb("ff5733"), Srgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("#Ff5733"), Srgb::new(255, 87, 51));
    }

    #[test]
    fn test_hex_to_rgb_invalid_is_black() {
        for bad in ["", "#", "#FFF", "#GG0000", "#FF57331", "##FF5733", "red", "#ff57 3"] {
            assert_eq!(hex_to_rgb(bad), black(), "'{}' should fall back to black", bad);
        }
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert_eq!(
            parse_hex("#FFF"),
            Err(ColorError::InvalidLength("#FFF".to_string()))
        );
        assert_eq!(
            parse_hex("#ZZ0000"),
            Err(ColorError::InvalidDigit("#ZZ0000".to_string()))
        );
        // Multi-byte characters must not be sliced
        assert!(parse_hex("#ééé").is_err());
    }

    #[test]
    fn test_normalize_hex_uppercases() {
        assert_eq!(normalize_hex("abcdef").unwrap(), "#ABCDEF");
        assert_eq!(normalize_hex("#0a0B0c").unwrap(), "#0A0B0C");
        assert!(normalize_hex("#12345").is_err());
    }

    #[test]
    fn test_is_valid_hex_requires_prefix() {
        assert!(is_valid_hex("#a1B2c3"));
        assert!(!is_valid_hex("a1B2c3"));
        assert!(!is_valid_hex("#a1B2c"));
    }

    // --- hex -> HSB ---

    #[test]
    fn test_hex_to_hsb_known_values() {
        assert_eq!(hex_to_hsb("#FF5733"), Hsb::new(11, 80, 100));
        assert_eq!(hex_to_hsb("#0000FF"), Hsb::new(240, 100, 100));
        assert_eq!(hex_to_hsb("#00FF00"), Hsb::new(120, 100, 100));
        assert_eq!(hex_to_hsb("#FF00FF"), Hsb::new(300, 100, 100));
        assert_eq!(hex_to_hsb("#123456"), Hsb::new(210, 79, 34));
    }

    #[test]
    fn test_hex_to_hsb_achromatic() {
        let hsb = hex_to_hsb("#808080");
        assert_eq!(hsb.s, 0);
        assert_eq!(hsb.b, 50);
        assert_eq!(hex_to_hsb("#000000"), Hsb::new(0, 0, 0));
        assert_eq!(hex_to_hsb("#FFFFFF"), Hsb::new(0, 0, 100));
    }

    #[test]
    fn test_hex_to_hsb_hue_in_range() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let hsb = rgb_to_hsb(Srgb::new(r, g, b));
                    assert!((0..360).contains(&hsb.h), "hue {} out of range", hsb.h);
                    assert!((0..=100).contains(&hsb.s));
                    assert!((0..=100).contains(&hsb.b));
                }
            }
        }
    }

    // --- HSB -> hex ---

    #[test]
    fn test_hsb_to_hex_primaries() {
        assert_eq!(hsb_to_hex(Hsb::new(0, 100, 100)), "#FF0000");
        assert_eq!(hsb_to_hex(Hsb::new(120, 100, 100)), "#00FF00");
        assert_eq!(hsb_to_hex(Hsb::new(240, 100, 100)), "#0000FF");
        assert_eq!(hsb_to_hex(Hsb::new(30, 100, 100)), "#FF8000");
        assert_eq!(hsb_to_hex(Hsb::new(300, 50, 50)), "#804080");
    }

    #[test]
    fn test_hsb_to_hex_hue_is_cyclic() {
        assert_eq!(
            hsb_to_hex(Hsb::new(360, 100, 100)),
            hsb_to_hex(Hsb::new(0, 100, 100))
        );
        assert_eq!(
            hsb_to_hex(Hsb::new(-120, 100, 100)),
            hsb_to_hex(Hsb::new(240, 100, 100))
        );
        assert_eq!(
            hsb_to_hex(Hsb::new(725, 40, 60)),
            hsb_to_hex(Hsb::new(5, 40, 60))
        );
    }

    #[test]
    fn test_hsb_to_hex_clamps_percentages() {
        assert_eq!(hsb_to_hex(Hsb::new(0, 150, 200)), "#FF0000");
        assert_eq!(hsb_to_hex(Hsb::new(0, -10, -10)), "#000000");
    }

    // --- round trip ---

    #[test]
    fn test_round_trip_known_value() {
        let back = hsb_to_hex(hex_to_hsb("#FF5733"));
        assert_eq!(back, "#FF5833");
        assert!(channel_error(hex_to_rgb(&back), Srgb::new(255, 87, 51)) <= 1);
    }

    #[test]
    fn test_round_trip_grays_within_one() {
        for v in 0..=255u8 {
            let rgb = Srgb::new(v, v, v);
            let back = hsb_to_rgb(rgb_to_hsb(rgb));
            assert!(channel_error(rgb, back) <= 1, "gray {} drifted to {:?}", v, back);
        }
    }

    #[test]
    fn test_round_trip_bounded() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let hex = rgb_to_hex(Srgb::new(r, g, b));
                    let back = hex_to_rgb(&hsb_to_hex(hex_to_hsb(&hex)));
                    let err = channel_error(Srgb::new(r, g, b), back);
                    assert!(
                        err <= ROUND_TRIP_TOLERANCE,
                        "{} round-tripped with error {}",
                        hex,
                        err
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsb_to_hex_is_uppercase() {
        let hex = hsb_to_hex(Hsb::new(200, 73, 88));
        assert!(is_valid_hex(&hex));
        assert_eq!(hex, hex.to_uppercase());
    }

    // --- distance ---

    #[test]
    fn test_distance_zero_and_symmetric() {
        let x = Srgb::new(255, 87, 51);
        let y = Srgb::new(10, 200, 30);
        assert_eq!(calculate_color_distance(x, x), 0.0);
        assert_eq!(calculate_color_distance(x, y), calculate_color_distance(y, x));
    }

    #[test]
    fn test_distance_black_white() {
        let d = calculate_color_distance(black(), Srgb::new(255, 255, 255));
        assert!((d - 255.0 * 3f64.sqrt()).abs() < 1e-9);
    }
}
