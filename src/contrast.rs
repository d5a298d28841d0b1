//! Text contrast picking: black or white foreground for a hex background.
//!
//! Uses the WCAG relative-luminance formula with a fixed 0.5 threshold
//! (not a contrast-ratio test).

use std::fmt;
use thiserror::Error;

/// Dark text color, used on light backgrounds.
pub const BLACK: &str = "#000000";
/// Light text color, used on dark backgrounds and for malformed input.
pub const WHITE: &str = "#ffffff";
/// Backgrounds with luminance strictly above this get black text.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Why a hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits: {0:?}")]
    InvalidDigit(String),
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = if digits.chars().count() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        let len = expanded.chars().count();
        if len != 6 {
            return Err(ColorError::InvalidLength(len));
        }
        // Six chars; anything non-ASCII fails the digit check below anyway.
        if !expanded.is_ascii() {
            return Err(ColorError::InvalidDigit(expanded));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidDigit(expanded[i..i + 2].to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// sRGB channel in 0..=1 -> linear light
fn to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance(rgb: Rgb8) -> f64 {
    let r = to_linear(f64::from(rgb.r) / 255.0);
    let g = to_linear(f64::from(rgb.g) / 255.0);
    let b = to_linear(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Pick [`BLACK`] or [`WHITE`] text for the given background.
///
/// Never fails: anything that is not a 3- or 6-digit hex color gets [`WHITE`].
/// A pair is either two hex digits or malformed; `#fffff-` is not read as
/// `ffff0f` the way a lenient prefix parser would.
pub fn text_color_for_bg(hex: &str) -> &'static str {
    match Rgb8::from_hex(hex) {
        Ok(rgb) if relative_luminance(rgb) > LUMINANCE_THRESHOLD => BLACK,
        _ => WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_shorthand() {
        assert_eq!(Rgb8::from_hex("#ef4444"), Ok(Rgb8::new(0xef, 0x44, 0x44)));
        assert_eq!(Rgb8::from_hex("ef4444"), Ok(Rgb8::new(0xef, 0x44, 0x44)));
        assert_eq!(Rgb8::from_hex("#fA0"), Ok(Rgb8::new(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert_eq!(Rgb8::from_hex(""), Err(ColorError::InvalidLength(0)));
        assert_eq!(Rgb8::from_hex("#abcd"), Err(ColorError::InvalidLength(4)));
        assert_eq!(Rgb8::from_hex("##fff"), Err(ColorError::InvalidLength(4)));
        assert!(matches!(Rgb8::from_hex("xyz"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(Rgb8::from_hex("ééé"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn hex_display() {
        let c: Rgb8 = "#ABC".parse().unwrap();
        assert_eq!(c.to_hex(), "#aabbcc");
        assert_eq!(c.to_string(), "#aabbcc");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(Rgb8::new(0, 0, 0)), 0.0);
        assert!((relative_luminance(Rgb8::new(255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn black_on_light_white_on_dark() {
        assert_eq!(text_color_for_bg("#ffffff"), BLACK);
        assert_eq!(text_color_for_bg("#000000"), WHITE);
        assert_eq!(text_color_for_bg("#fff"), text_color_for_bg("#ffffff"));
        assert_eq!(text_color_for_bg("#ffff00"), BLACK);
    }

    #[test]
    fn threshold_is_strict() {
        // ~0.497: just below the threshold
        assert_eq!(text_color_for_bg("#bbbbbb"), WHITE);
        // ~0.503
        assert!(relative_luminance(Rgb8::new(0xbc, 0xbc, 0xbc)) > LUMINANCE_THRESHOLD);
        assert_eq!(text_color_for_bg("#bcbcbc"), BLACK);
    }

    #[test]
    fn malformed_defaults_to_white() {
        assert_eq!(text_color_for_bg("xyz"), WHITE);
        assert_eq!(text_color_for_bg(""), WHITE);
        assert_eq!(text_color_for_bg("#ffff"), WHITE);
        assert_eq!(text_color_for_bg("not a color"), WHITE);
        // partial pairs are not salvaged
        assert_eq!(text_color_for_bg("#fffff-"), WHITE);
        assert_eq!(text_color_for_bg("#ffff-f"), WHITE);
    }
}
