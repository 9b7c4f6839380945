//! Hex colour parsing.

use crate::error::{Error, Result};
use crate::model::{Color, OptionalColor, RgbColor};

/// Parse `RRGGBB` or `#RRGGBB` into a service colour.
///
/// Exactly six hex digits are required; anything else yields `None` rather
/// than a partial parse.
pub fn parse_color(hex: &str) -> Option<OptionalColor> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };

    Some(OptionalColor {
        color: Some(Color {
            rgb_color: Some(RgbColor {
                red: channel(0)?,
                green: channel(2)?,
                blue: channel(4)?,
            }),
        }),
    })
}

/// Like [`parse_color`], but reports malformed input as an error.
pub fn require_color(hex: &str) -> Result<OptionalColor> {
    parse_color(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))
}
