// SPDX-License-Identifier: MIT
//
// Error type for the color layer.
//
// Only hex parsing can fail. Every numeric conversion is total: out-of-range
// input produces out-of-range output rather than an error.

use thiserror::Error;

/// Failure raised while reading a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#` followed by six lowercase hex digits.
    ///
    /// Carries the offending input verbatim.
    #[error("{0} is not a proper hex RGB color")]
    InvalidFormat(String),
}

/// Result alias for color parsing.
pub type ColorResult<T> = Result<T, ColorError>;
