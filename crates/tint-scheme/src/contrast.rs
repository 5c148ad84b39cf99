//! Contrast ratio between two colors.
//!
//! Built on [`Color::luminance`]. Ratios run from 1.0 (equal luminance) to
//! 21.0 (black against white).

use tint_color::Color;

/// Luminance offset that keeps the ratio finite for black.
const FLARE: f64 = 0.05;

/// `(L_max + 0.05) / (L_min + 0.05)` over the two luminances.
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let (la, lb) = (a.luminance(), b.luminance());
    (la.max(lb) + FLARE) / (la.min(lb) + FLARE)
}
