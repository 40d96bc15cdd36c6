//! Palette construction: from a seed color or hue/saturation to ten steps.
//!
//! Every step shares the palette's hue. Lightness comes from the fixed
//! ramp in [`curve`](crate::curve); chroma is the selected curve's base
//! value scaled by saturation. Saturation 0 collapses the palette to a gray
//! ramp at the same lightness steps.

use std::ops::Index;

use okramp_color::{ColorResult, Oklch, Rgb, parse_rgb, rgb_saturation, rgb_to_oklch};
use serde::ser::{Serialize, Serializer};

use crate::curve::{ChromaCurve, lightness};
use crate::step::PaletteColor;

// ---------------------------------------------------------------------------
// PaletteSeed
// ---------------------------------------------------------------------------

/// What a palette is derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteSeed {
    /// A `#rrggbb` seed color. Hue and saturation are measured from it.
    Hex(String),
    /// Hue in degrees and a saturation factor, used as given.
    HueSat { hue: f64, saturation: f64 },
}

impl PaletteSeed {
    /// Seed from a hex color string.
    #[must_use]
    pub fn hex(seed: impl Into<String>) -> Self {
        Self::Hex(seed.into())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Ten OKLCH tonal steps sharing one hue.
///
/// Always complete: every [`PaletteColor`] maps to a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    hue: f64,
    saturation: f64,
    curve: ChromaCurve,
    steps: [Oklch; 10],
}

impl Palette {
    /// The color at `step`.
    #[inline]
    #[must_use]
    pub const fn get(&self, step: PaletteColor) -> Oklch {
        self.steps[step.index()]
    }

    /// Hue shared by every step, in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation factor the chroma curve was scaled by.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// The chroma curve selected for this palette's hue.
    #[must_use]
    pub const fn curve(&self) -> ChromaCurve {
        self.curve
    }

    /// Steps in order, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteColor, Oklch)> + '_ {
        PaletteColor::ALL.into_iter().zip(self.steps.iter().copied())
    }

    /// Render every step to sRGB channels, lightest first.
    ///
    /// With `clip` the channels are clamped into 0–255; without it steps
    /// that fall outside sRGB keep their raw channels.
    #[must_use]
    pub fn to_rgb(&self, clip: bool) -> Vec<(PaletteColor, Rgb)> {
        self.iter().map(|(step, color)| (step, color.to_rgb(clip))).collect()
    }
}

impl Index<PaletteColor> for Palette {
    type Output = Oklch;

    fn index(&self, step: PaletteColor) -> &Oklch {
        &self.steps[step.index()]
    }
}

/// Serialized as a map keyed `"0"`..`"9"`.
impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(PaletteColor::ALL.iter().zip(&self.steps))
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build a palette from either seed shape.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`](okramp_color::ColorError::InvalidFormat)
/// when a [`PaletteSeed::Hex`] seed is not a valid hex color. The
/// [`PaletteSeed::HueSat`] form never fails.
pub fn make_palette(seed: &PaletteSeed) -> ColorResult<Palette> {
    match seed {
        PaletteSeed::Hex(hex) => make_palette_from_hex(hex),
        PaletteSeed::HueSat { hue, saturation } => Ok(make_palette_from_hue(*hue, *saturation)),
    }
}

/// Build a palette from a `#rrggbb` seed color.
///
/// The hue is taken from the seed's OKLCH hue, the saturation from its HSL
/// saturation.
///
/// The hue is measured on the raw 0–255 channels rather than the normalized
/// ones, which shifts it by a fraction of a degree for typical colors
/// (`#3b82f6`: 259.95° instead of 259.83°). Existing palettes were built
/// this way.
///
/// ```
/// use okramp_palette::{ChromaCurve, make_palette_from_hex};
///
/// let blue = make_palette_from_hex("#3b82f6").unwrap();
/// assert_eq!(blue.curve(), ChromaCurve::Ternary);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`](okramp_color::ColorError::InvalidFormat)
/// when `seed` is not a valid hex color.
pub fn make_palette_from_hex(seed: &str) -> ColorResult<Palette> {
    let rgb = parse_rgb(seed)?;
    let hue = rgb_to_oklch(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)).h;
    let saturation = rgb_saturation(&rgb);
    tracing::debug!(seed, hue, saturation, "palette seed measured");
    Ok(make_palette_from_hue(hue, saturation))
}

/// Build a palette from a hue in degrees and a saturation factor.
///
/// Neither input is validated: hues outside [0, 360) pick the primary
/// curve, and negative saturation gives negative chroma.
///
/// ```
/// use okramp_palette::{PaletteColor, make_palette_from_hue};
///
/// let gray = make_palette_from_hue(0.0, 0.0);
/// assert_eq!(gray[PaletteColor::Step4].c, 0.0);
/// ```
#[must_use]
pub fn make_palette_from_hue(hue: f64, saturation: f64) -> Palette {
    let curve = ChromaCurve::for_hue(hue);
    let steps = PaletteColor::ALL.map(|step| Oklch {
        l: lightness(step),
        c: curve.chroma(step) * saturation,
        h: hue,
    });
    Palette {
        hue,
        saturation,
        curve,
        steps,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use okramp_color::ColorError;
    use pretty_assertions::assert_eq;

    fn assert_invariants(p: &Palette) {
        let steps: Vec<_> = p.iter().collect();
        assert_eq!(steps.len(), 10);

        for (i, (step, color)) in steps.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(color.h.to_bits(), p.hue().to_bits(), "hue drifted at {step}");
            assert_eq!(color.l, lightness(*step));
            assert_eq!(color.c, p.curve().chroma(*step) * p.saturation());
        }

        for pair in steps.windows(2) {
            assert!(pair[0].1.l > pair[1].1.l, "L not decreasing at {}", pair[1].0);
        }
    }

    // ── Hue/saturation form ──────────────────────────────────────────────

    #[test]
    fn neutral_ramp_at_zero_saturation() {
        let p = make_palette_from_hue(0.0, 0.0);
        assert_invariants(&p);
        for (_, color) in p.iter() {
            assert_eq!(color.c, 0.0);
            assert_eq!(color.h, 0.0);
        }
    }

    #[test]
    fn full_saturation_uses_curve_values() {
        let p = make_palette_from_hue(30.0, 1.0);
        assert_invariants(&p);
        assert_eq!(p.curve(), ChromaCurve::Primary);
        assert_eq!(p[PaletteColor::Step4], Oklch::new(0.625, 0.150, 30.0));
        assert_eq!(p[PaletteColor::Step0], Oklch::new(0.950, 0.030, 30.0));
    }

    #[test]
    fn chroma_scales_linearly() {
        let half = make_palette_from_hue(90.0, 0.5);
        let full = make_palette_from_hue(90.0, 1.0);
        assert_eq!(half.curve(), ChromaCurve::Secondary);
        for step in PaletteColor::ALL {
            assert_abs_diff_eq!(half[step].c * 2.0, full[step].c, epsilon = 1e-15);
        }
    }

    #[test]
    fn ternary_palette() {
        let p = make_palette_from_hue(200.0, 1.0);
        assert_invariants(&p);
        assert_eq!(p.curve(), ChromaCurve::Ternary);
        assert_eq!(p[PaletteColor::Step4].c, 0.100);
    }

    #[test]
    fn negative_saturation_negates_chroma() {
        let p = make_palette_from_hue(30.0, -1.0);
        assert_invariants(&p);
        assert_eq!(p[PaletteColor::Step4].c, -0.150);
    }

    #[test]
    fn hue_out_of_range_passes_through() {
        let p = make_palette_from_hue(400.0, 1.0);
        assert_invariants(&p);
        assert_eq!(p.curve(), ChromaCurve::Primary);
        assert_eq!(p[PaletteColor::Step9].h, 400.0);
    }

    #[test]
    fn get_matches_index() {
        let p = make_palette_from_hue(150.0, 0.7);
        for step in PaletteColor::ALL {
            assert_eq!(p.get(step), p[step]);
        }
    }

    // ── Seed form ────────────────────────────────────────────────────────

    #[test]
    fn blue_seed_is_ternary() {
        let p = make_palette_from_hex("#3b82f6").unwrap();
        assert_invariants(&p);
        assert_eq!(p.curve(), ChromaCurve::Ternary);
        assert!((172.0..=277.0).contains(&p.hue()), "hue {}", p.hue());
        assert_abs_diff_eq!(p.saturation(), 187.0 / 205.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[PaletteColor::Step4].c, 0.100 * 187.0 / 205.0, epsilon = 1e-12);
    }

    #[test]
    fn seed_hue_uses_byte_channels() {
        // Measured on 0–255 values, not the normalized channels.
        let p = make_palette_from_hex("#3b82f6").unwrap();
        let normalized = Rgb::new(0x3b, 0x82, 0xf6).to_oklch().h;
        assert_abs_diff_eq!(p.hue(), 259.949_74, epsilon = 1e-4);
        assert!((p.hue() - normalized).abs() > 0.1);
    }

    #[test]
    fn red_seed_is_primary() {
        let p = make_palette_from_hex("#ff0000").unwrap();
        assert_invariants(&p);
        assert_eq!(p.curve(), ChromaCurve::Primary);
        assert_abs_diff_eq!(p.hue(), 29.221, epsilon = 1e-3);
        assert_abs_diff_eq!(p.saturation(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn gray_seed_has_no_chroma() {
        let p = make_palette_from_hex("#808080").unwrap();
        assert_invariants(&p);
        for (_, color) in p.iter() {
            assert_eq!(color.c, 0.0);
        }
    }

    #[test]
    fn invalid_seed_propagates() {
        assert_eq!(
            make_palette_from_hex("#FF0000"),
            Err(ColorError::InvalidFormat("#FF0000".into()))
        );
        assert!(make_palette_from_hex("blue").is_err());
    }

    // ── Tagged entry point ───────────────────────────────────────────────

    #[test]
    fn seed_shapes_dispatch() {
        let by_hex = make_palette(&PaletteSeed::hex("#3b82f6")).unwrap();
        assert_eq!(by_hex, make_palette_from_hex("#3b82f6").unwrap());

        let by_hue = make_palette(&PaletteSeed::HueSat {
            hue: 120.0,
            saturation: 0.4,
        })
        .unwrap();
        assert_eq!(by_hue, make_palette_from_hue(120.0, 0.4));
    }

    #[test]
    fn hex_seed_error_through_dispatch() {
        assert!(make_palette(&PaletteSeed::hex("#12345")).is_err());
    }

    // ── Rendering ────────────────────────────────────────────────────────

    #[test]
    fn gray_ramp_renders_to_grays() {
        let p = make_palette_from_hue(0.0, 0.0);
        for (_, rgb) in p.to_rgb(false) {
            assert_eq!(rgb.r, rgb.g);
            assert_eq!(rgb.g, rgb.b);
            assert!(rgb.in_gamut());
        }
    }

    #[test]
    fn clipped_render_always_in_gamut() {
        let p = make_palette_from_hue(90.0, 1.0);
        let rendered = p.to_rgb(true);
        assert_eq!(rendered.len(), 10);
        assert!(rendered.iter().all(|(_, rgb)| rgb.in_gamut()));
        assert!(rendered.iter().all(|(_, rgb)| rgb.hex.len() == 7));
    }

    #[test]
    fn render_is_light_to_dark() {
        let p = make_palette_from_hex("#3b82f6").unwrap();
        let rendered = p.to_rgb(true);
        assert_eq!(rendered[0].0, PaletteColor::Step0);
        assert_eq!(rendered[9].0, PaletteColor::Step9);
        let sum = |rgb: &Rgb| rgb.r + rgb.g + rgb.b;
        assert!(sum(&rendered[0].1) > sum(&rendered[9].1));
    }

    // ── Serialization ────────────────────────────────────────────────────

    #[test]
    fn serializes_as_step_map() {
        let p = make_palette_from_hue(0.0, 0.0);
        let json = serde_json::to_value(&p).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 10);
        assert_eq!(map["0"], serde_json::json!({ "L": 0.95, "C": 0.0, "H": 0.0 }));
        assert_eq!(map["9"]["L"], serde_json::json!(0.25));
    }
}
