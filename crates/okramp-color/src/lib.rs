// SPDX-License-Identifier: MIT
//
// okramp-color — sRGB ⇄ OKLCH conversion for okramp.
//
// The bottom layer of the palette pipeline. Two pieces live here:
//
//   color.rs → OKLCH ↔ Oklab ↔ LMS ↔ linear sRGB ↔ sRGB (0–255)
//   hex.rs   → `#rrggbb` parsing/formatting and the HSL saturation estimate
//
// Everything is pure and stateless. The only shared state is a lazily
// compiled validation regex, which is read-only once built.

// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod hex;

pub use color::{Oklch, Rgb, oklch_to_rgb, rgb_to_oklch};
pub use error::{ColorError, ColorResult};
pub use hex::{format_hex, parse_rgb, rgb_saturation};
