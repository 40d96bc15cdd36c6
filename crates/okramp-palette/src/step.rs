//! Tonal step keys: the closed set `"0"`..`"9"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the ten tonal steps of a palette, lightest (`"0"`) to darkest
/// (`"9"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    #[serde(rename = "0")]
    Step0,
    #[serde(rename = "1")]
    Step1,
    #[serde(rename = "2")]
    Step2,
    #[serde(rename = "3")]
    Step3,
    #[serde(rename = "4")]
    Step4,
    #[serde(rename = "5")]
    Step5,
    #[serde(rename = "6")]
    Step6,
    #[serde(rename = "7")]
    Step7,
    #[serde(rename = "8")]
    Step8,
    #[serde(rename = "9")]
    Step9,
}

impl PaletteColor {
    /// Every step, lightest first.
    pub const ALL: [Self; 10] = [
        Self::Step0,
        Self::Step1,
        Self::Step2,
        Self::Step3,
        Self::Step4,
        Self::Step5,
        Self::Step6,
        Self::Step7,
        Self::Step8,
        Self::Step9,
    ];

    /// Position in [`ALL`](Self::ALL), 0 through 9.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The step's key as used in palette maps: `"0"`..`"9"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Step0 => "0",
            Self::Step1 => "1",
            Self::Step2 => "2",
            Self::Step3 => "3",
            Self::Step4 => "4",
            Self::Step5 => "5",
            Self::Step6 => "6",
            Self::Step7 => "7",
            Self::Step8 => "8",
            Self::Step9 => "9",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for any index outside 0–9 or key other than `"0"`..`"9"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("palette steps are \"0\" through \"9\"")]
pub struct UnknownStep;

impl TryFrom<u8> for PaletteColor {
    type Error = UnknownStep;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(value)).copied().ok_or(UnknownStep)
    }
}

impl FromStr for PaletteColor {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [d @ b'0'..=b'9'] => Self::try_from(d - b'0'),
            _ => Err(UnknownStep),
        }
    }
}
