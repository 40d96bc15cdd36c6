//! Lightness and chroma tables: the fixed shape of every palette.
//!
//! All palettes share one lightness ramp. Chroma comes from one of three
//! curves chosen by hue: the teal–blue band can't carry as much chroma as
//! reds, greens and violets at the same lightness before leaving sRGB, so
//! it gets the flattest curve.
//!
//! | curve       | hue bands (degrees)                       | peak C |
//! |-------------|-------------------------------------------|--------|
//! | `Ternary`   | 172 ..= 277                               | 0.100  |
//! | `Secondary` | 57 ..= 122, 156 ..< 172, 227 <.. 243      | 0.120  |
//! | `Primary`   | everything else                           | 0.150  |
//!
//! The ternary band was tuned as 172..=227 but has always been applied up
//! to 277, which swallows the 227 <.. 243 secondary band. Published
//! palettes depend on the 277 bound.

use serde::{Deserialize, Serialize};

use crate::step::PaletteColor;

/// Lightness per step, `"0"` first. Strictly decreasing.
const LIGHTNESS: [f64; 10] = [0.950, 0.890, 0.820, 0.740, 0.625, 0.500, 0.400, 0.350, 0.300, 0.250];

const CHROMA_TERNARY: [f64; 10] = [0.030, 0.040, 0.050, 0.070, 0.100, 0.080, 0.060, 0.050, 0.040, 0.030];

const CHROMA_SECONDARY: [f64; 10] = [0.030, 0.045, 0.060, 0.085, 0.120, 0.096, 0.072, 0.058, 0.044, 0.030];

const CHROMA_PRIMARY: [f64; 10] = [0.030, 0.053, 0.075, 0.108, 0.150, 0.120, 0.090, 0.070, 0.050, 0.030];

/// OKLCH lightness of a step. Identical for every palette.
#[inline]
#[must_use]
pub const fn lightness(step: PaletteColor) -> f64 {
    LIGHTNESS[step.index()]
}

/// The base-chroma curve a palette is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaCurve {
    /// Cool teal–blue hues. Lowest chroma.
    Ternary,
    /// Yellow–green and the edges of the cool band.
    Secondary,
    /// Reds, oranges, greens and violets. Highest chroma.
    Primary,
}

impl ChromaCurve {
    /// Select the curve for a hue in degrees.
    ///
    /// Hues are not normalized: values outside [0, 360), and NaN, fall
    /// through to [`Primary`](Self::Primary).
    #[must_use]
    pub fn for_hue(hue: f64) -> Self {
        let curve = if (172.0..=277.0).contains(&hue) {
            Self::Ternary
        } else if (57.0..=122.0).contains(&hue)
            || (156.0..172.0).contains(&hue)
            || (hue > 227.0 && hue <= 243.0)
        {
            Self::Secondary
        } else {
            Self::Primary
        };
        tracing::trace!(hue, ?curve, "chroma curve selected");
        curve
    }

    /// Base chroma of a step on this curve, before saturation scaling.
    #[inline]
    #[must_use]
    pub const fn chroma(self, step: PaletteColor) -> f64 {
        let table = match self {
            Self::Ternary => &CHROMA_TERNARY,
            Self::Secondary => &CHROMA_SECONDARY,
            Self::Primary => &CHROMA_PRIMARY,
        };
        table[step.index()]
    }

    /// Lowercase name, as used in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ternary => "ternary",
            Self::Secondary => "secondary",
            Self::Primary => "primary",
        }
    }
}
