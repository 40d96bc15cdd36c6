// SPDX-License-Identifier: MIT
//
// Hex codec: `#rrggbb` text ⇄ integer channels.
//
// Accepted input is deliberately narrow: `#` followed by six characters from
// `[0-9a-z]`, matched at the start of the string only. Uppercase digits are
// rejected. Anything after the sixth digit is ignored for the channels but
// kept in `Rgb::hex`.
//
// Also home to the HSL saturation estimate, which the palette builder uses
// to scale chroma for seed colors.

use std::sync::OnceLock;

use regex::Regex;

use crate::color::Rgb;
use crate::error::{ColorError, ColorResult};

// ─── Parsing ─────────────────────────────────────────────────────────────────

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9a-z]{6}").expect("hex color pattern compiles"))
}

/// Parse a `#rrggbb` string into channels.
///
/// The input string is kept verbatim as `hex`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the input does not start with
/// `#` and six characters from `[0-9a-z]`, or when those characters are not
/// all hex digits (`g`–`z` pass the first check but carry no value).
///
/// ```
/// use okramp_color::parse_rgb;
///
/// let red = parse_rgb("#ff0000").unwrap();
/// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
/// assert!(parse_rgb("#FF0000").is_err());
/// ```
pub fn parse_rgb(hex: &str) -> ColorResult<Rgb> {
    if !hex_pattern().is_match(hex) {
        tracing::debug!(input = hex, "rejected hex color");
        return Err(ColorError::InvalidFormat(hex.to_owned()));
    }

    // The pattern guarantees bytes 1..7 are ASCII, so these slices are on
    // char boundaries.
    let channel = |digits: &str| {
        i32::from_str_radix(digits, 16).map_err(|_| {
            tracing::debug!(input = hex, digits, "non-hex digits in color");
            ColorError::InvalidFormat(hex.to_owned())
        })
    };

    Ok(Rgb {
        r: channel(&hex[1..3])?,
        g: channel(&hex[3..5])?,
        b: channel(&hex[5..7])?,
        hex: hex.to_owned(),
    })
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Render channels as `#` + three lowercase hex components.
///
/// Each component is zero-padded to two characters. Channels outside 0–255
/// are written as-is rather than clamped: a negative channel becomes `-`
/// followed by its magnitude, and a channel above 255 takes three or more
/// digits. In-range channels always give a well-formed `#rrggbb`.
///
/// ```
/// use okramp_color::format_hex;
///
/// assert_eq!(format_hex(59, 130, 246), "#3b82f6");
/// assert_eq!(format_hex(4021, -9, 0), "#fb5-900");
/// ```
#[must_use]
pub fn format_hex(r: i32, g: i32, b: i32) -> String {
    format!("#{}{}{}", component(r), component(g), component(b))
}

fn component(v: i32) -> String {
    let digits = if v < 0 {
        format!("-{:x}", v.unsigned_abs())
    } else {
        format!("{v:x}")
    };
    format!("{digits:0>2}")
}

// ─── Saturation ──────────────────────────────────────────────────────────────

/// HSL saturation of an 8-bit color, in 0.0–1.0.
///
/// Channels are divided by 255 first, so pass the raw 0–255 values, not
/// normalized ones. Grays (max == min) give 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_saturation(rgb: &Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return 0.0;
    }

    let d = max - min;
    if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
