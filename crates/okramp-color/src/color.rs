// SPDX-License-Identifier: MIT
//
// okramp color conversion: OKLCH ⇄ sRGB with byte-range channels.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ LMS (cube-root) ↔ Linear sRGB ↔ sRGB ↔ 0–255 channels
//
// The math runs in f64 with plain multiply/add so every derived color lands
// on the same integer channels as the reference palettes. Results are NOT
// gamut-mapped: OKLCH values outside sRGB produce channels outside 0–255
// unless the caller asks for clipping.

// Plain `a * x + b` keeps rounding identical to the reference palettes;
// fused multiply-add would move some channels by one.
#![allow(clippy::suboptimal_flops)]

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::hex::{format_hex, parse_rgb};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color as integer channels plus its hex rendering.
///
/// Channels are nominally 0–255 but are stored as `i32`: converting an
/// out-of-gamut OKLCH color without clipping yields negative channels or
/// channels above 255, and `hex` then spells those values out verbatim
/// (e.g. `#fb5-a64bc-4bb`).
///
/// ```
/// use okramp_color::Rgb;
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.hex, "#ff0000");
/// assert_eq!(red.to_string(), "#ff0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    #[serde(rename = "R")]
    pub r: i32,

    /// Green channel.
    #[serde(rename = "G")]
    pub g: i32,

    /// Blue channel.
    #[serde(rename = "B")]
    pub b: i32,

    /// Hex rendering. For parsed colors this is the input string as given.
    pub hex: String,
}

impl Rgb {
    /// Build from channel numbers, rendering `hex` from them.
    #[must_use]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r,
            g,
            b,
            hex: format_hex(r, g, b),
        }
    }

    /// Channels divided by 255, ready for [`rgb_to_oklch`].
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Whether every channel lies within 0–255.
    #[must_use]
    pub fn in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|v| (0..=255).contains(v))
    }

    /// Convert to OKLCH via the normalized channels.
    #[must_use]
    pub fn to_oklch(&self) -> Oklch {
        let (r, g, b) = self.normalized();
        rgb_to_oklch(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rgb(s)
    }
}

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in OKLCH: lightness, chroma, hue.
///
/// No component is clamped. Lightness is designed for 0.0–1.0, chroma for
/// values ≥ 0, and hue for degrees in [0, 360), but arithmetic on any of
/// them is carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    #[serde(rename = "L")]
    pub l: f64,

    /// Chroma (colorfulness). 0.0 is gray.
    #[serde(rename = "C")]
    pub c: f64,

    /// Hue angle in degrees.
    /// 0° = pink/red, 90° = yellow, 180° = cyan/green, 270° = blue/purple.
    #[serde(rename = "H")]
    pub h: f64,
}

impl Oklch {
    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert to integer sRGB channels. See [`oklch_to_rgb`].
    #[must_use]
    pub fn to_rgb(self, clip: bool) -> Rgb {
        oklch_to_rgb(self.l, self.c, self.h, clip)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.2})", self.l, self.c, self.h)
    }
}

// ─── Public conversions ──────────────────────────────────────────────────────

/// Convert OKLCH to integer sRGB channels.
///
/// Each channel is scaled to 0–255 and rounded half toward +∞. With `clip`
/// the rounded channels are clamped into 0–255; without it out-of-gamut
/// colors keep their out-of-range channels, and `hex` reflects them.
///
/// ```
/// use okramp_color::oklch_to_rgb;
///
/// let white = oklch_to_rgb(1.0, 0.0, 0.0, false);
/// assert_eq!(white.hex, "#ffffff");
///
/// let wild = oklch_to_rgb(1.5, 10.0, 0.0, true);
/// assert!(wild.in_gamut());
/// ```
#[must_use]
pub fn oklch_to_rgb(l: f64, c: f64, h: f64, clip: bool) -> Rgb {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);

    let mut r = to_channel(linear_to_srgb(lr));
    let mut g = to_channel(linear_to_srgb(lg));
    let mut bl = to_channel(linear_to_srgb(lb));

    if clip {
        r = r.clamp(0, 255);
        g = g.clamp(0, 255);
        bl = bl.clamp(0, 255);
    }

    tracing::trace!(l, c, h, clip, r, g, b = bl, "oklch → rgb");
    Rgb::new(r, g, bl)
}

/// Convert normalized sRGB (each channel 0.0–1.0) to OKLCH.
///
/// Inputs are not validated. Passing 0–255 values produces a well-defined
/// but meaningless result.
///
/// The hue is `atan2(b, a)` in degrees, shifted into [0, 360) when negative.
/// Achromatic input keeps whatever angle `atan2` produces.
#[must_use]
pub fn rgb_to_oklch(r: f64, g: f64, b: f64) -> Oklch {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);
    let (l, a, b_ok) = linear_srgb_to_oklab(lr, lg, lb);

    let c = (a * a + b_ok * b_ok).sqrt();
    let h = b_ok.atan2(a) * 180.0 / PI;
    let h = if h < 0.0 { h + 360.0 } else { h };

    tracing::trace!(r, g, b, l, c, h, "rgb → oklch");
    Oklch { l, c, h }
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h * PI / 180.0;
    (c * h_rad.cos(), c * h_rad.sin())
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Both directions pass through LMS cone space. The first matrix in each
// direction produces (or consumes) cube-rooted LMS values; the second maps
// to (or from) the target space. Constants are Björn Ottosson's, written
// out to the full printed precision.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l_ok + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l_ok - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l_ok - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s;
    let g = -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s;
    let bl = -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s;

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.412_165_612_0 * r + 0.536_275_208_0 * g + 0.051_457_565_3 * b;
    let m = 0.211_859_107_0 * r + 0.680_718_958_4 * g + 0.107_406_579_0 * b;
    let s = 0.088_309_794_7 * r + 0.281_847_417_4 * g + 0.630_261_361_6 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_;
    let a = 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_;
    let b_ok = 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_;

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Slope of the linear segment near black.
///
/// IEC 61966-2-1 uses 12.92. Published okramp palettes were produced with
/// this value, so it stays until every palette is regenerated.
pub const SRGB_LINEAR_SLOPE: f64 = 12.923_21;

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        SRGB_LINEAR_SLOPE * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.040_45 {
        v / SRGB_LINEAR_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Round half toward +∞.
///
/// `f64::round` rounds half away from zero, which differs for negative
/// half-way values (-2.5 → -3 instead of -2).
#[inline]
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Scale a 0.0–1.0 component to a 0–255 channel.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn to_channel(v: f64) -> i32 {
    // Saturating cast: absurd inputs pin to i32::MIN/MAX, NaN becomes 0.
    round_half_up(v * 255.0) as i32
}

// ─── Tests ───────────────────────────────────────────────────────────────────
