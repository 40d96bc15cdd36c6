//! # okramp-palette — ten-step OKLCH tonal palettes
//!
//! Derives a monochromatic ramp of ten colors, `"0"` (lightest) through
//! `"9"` (darkest), from either a seed color or an explicit hue and
//! saturation.
//!
//! # Architecture
//!
//! ```text
//! "#3b82f6"  ──parse──▶ Rgb ──▶ hue (OKLCH) + saturation (HSL)
//!                                   │
//! (hue, saturation) ────────────────┤
//!                                   ▼
//! curve.rs:   pick a chroma curve by hue bucket
//!     │
//!     ▼
//! palette.rs: L from the shared lightness table,
//!             C = curve chroma × saturation, H = hue
//! ```
//!
//! # Color Space
//!
//! Steps are plain OKLCH values and are not gamut-mapped. Use
//! [`Palette::to_rgb`] to render them, optionally clipped to 0–255.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod curve;
pub mod palette;
pub mod step;

pub use curve::{ChromaCurve, lightness};
pub use okramp_color::{ColorError, ColorResult, Oklch, Rgb};
pub use palette::{
    Palette, PaletteSeed, make_palette, make_palette_from_hex, make_palette_from_hue,
};
pub use step::{PaletteColor, UnknownStep};
