// SPDX-License-Identifier: MIT
//
// The engine has exactly one failure mode: input that cannot become a
// color. Numeric oddities (negative alpha, hue past 360, channels above
// 1.0) are not errors; they are stored verbatim.

use thiserror::Error;

/// Errors produced while constructing a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not a CSS color, or a structured/array input has the
    /// wrong shape. Carries the offending input for diagnostics.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
}

/// Result alias for color construction.
pub type Result<T> = std::result::Result<T, Error>;
