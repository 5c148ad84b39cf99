// SPDX-License-Identifier: MIT
//
// Manipulation operations.
//
// Value adjustments happen in HSV. Saturation and hue adjustments happen
// in the receiver's own cylinder (HSL for HSL colors, HSV otherwise), and
// blending in RGB. Whatever space the arithmetic uses, the result is handed back
// in the receiver's original representation.
//
// Adjusted channels are clamped to 0.0–1.0 here and nowhere else. Blend
// ratios are not clamped.

use crate::color::{Channels, Color};
use crate::convert::{self, Hsl, Hsv, Rgb};

/// ITU-R BT.709 luminance weights for linear red, green and blue.
pub const LUMINANCE_WEIGHTS: (f64, f64, f64) = (0.2126, 0.7152, 0.0722);

impl Color {
    /// Apply `f` to the HSV channels and return the result in this color's space.
    fn map_hsv(&self, f: impl FnOnce(Hsv) -> Hsv) -> Self {
        let hsv = Self::from_channels(Channels::Hsv(f(self.as_hsv())), self.alpha());
        hsv.to_space(self.space())
    }

    /// Apply `f` to the saturation of this color's own cylinder.
    fn map_saturation(&self, f: impl FnOnce(f64) -> f64) -> Self {
        match self.channels() {
            Channels::Hsl(c) => Self::from_channels(
                Channels::Hsl(Hsl {
                    saturation: f(c.saturation),
                    ..c
                }),
                self.alpha(),
            ),
            Channels::Rgb(_) | Channels::Hsv(_) => self.map_hsv(|c| Hsv {
                saturation: f(c.saturation),
                ..c
            }),
        }
    }

    // ─── Value ───────────────────────────────────────────────────────────

    /// Raise HSV value by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn value_by_amount(&self, amount: f64) -> Self {
        self.map_hsv(|c| Hsv {
            value: (c.value + amount).clamp(0.0, 1.0),
            ..c
        })
    }

    /// Lower HSV value by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn devalue_by_amount(&self, amount: f64) -> Self {
        self.value_by_amount(-amount)
    }

    /// Raise HSV value by `ratio` of itself (clamped to 0.0–1.0).
    #[must_use]
    pub fn value_by_ratio(&self, ratio: f64) -> Self {
        self.map_hsv(|c| Hsv {
            value: c.value.mul_add(ratio, c.value).clamp(0.0, 1.0),
            ..c
        })
    }

    /// Lower HSV value by `ratio` of itself (clamped to 0.0–1.0).
    #[must_use]
    pub fn devalue_by_ratio(&self, ratio: f64) -> Self {
        self.value_by_ratio(-ratio)
    }

    /// Lighten by adding `amount` to HSV value.
    #[inline]
    #[must_use]
    pub fn lighten_by_amount(&self, amount: f64) -> Self {
        self.value_by_amount(amount)
    }

    /// Darken by subtracting `amount` from HSV value.
    #[inline]
    #[must_use]
    pub fn darken_by_amount(&self, amount: f64) -> Self {
        self.devalue_by_amount(amount)
    }

    /// Lighten by scaling HSV value up by `ratio` (0.1 = 10% brighter).
    #[inline]
    #[must_use]
    pub fn lighten_by_ratio(&self, ratio: f64) -> Self {
        self.value_by_ratio(ratio)
    }

    /// Darken by scaling HSV value down by `ratio` (0.5 = half as bright).
    #[inline]
    #[must_use]
    pub fn darken_by_ratio(&self, ratio: f64) -> Self {
        self.devalue_by_ratio(ratio)
    }

    // ─── Saturation ──────────────────────────────────────────────────────

    /// Add `amount` to saturation (clamped to 0.0–1.0).
    ///
    /// HSL colors adjust HSL saturation, all others HSV saturation, matching
    /// [`Color::saturation`]. A negative amount desaturates.
    #[must_use]
    pub fn saturate_by_amount(&self, amount: f64) -> Self {
        self.map_saturation(|s| (s + amount).clamp(0.0, 1.0))
    }

    /// Subtract `amount` from saturation (clamped to 0.0–1.0).
    ///
    /// A negative amount saturates.
    #[must_use]
    pub fn desaturate_by_amount(&self, amount: f64) -> Self {
        self.saturate_by_amount(-amount)
    }

    /// Scale saturation up by `ratio` of itself (clamped to 0.0–1.0).
    #[must_use]
    pub fn saturate_by_ratio(&self, ratio: f64) -> Self {
        self.map_saturation(|s| s.mul_add(ratio, s).clamp(0.0, 1.0))
    }

    /// Scale saturation down by `ratio` of itself (clamped to 0.0–1.0).
    #[must_use]
    pub fn desaturate_by_ratio(&self, ratio: f64) -> Self {
        self.saturate_by_ratio(-ratio)
    }

    // ─── Hue ─────────────────────────────────────────────────────────────

    /// Rotate the hue by `degrees`; the resulting hue is in [0, 360).
    #[must_use]
    pub fn shift_hue(&self, degrees: f64) -> Self {
        match self.channels() {
            Channels::Hsl(c) => Self::from_channels(
                Channels::Hsl(Hsl {
                    hue: convert::normalize_hue(c.hue + degrees),
                    ..c
                }),
                self.alpha(),
            ),
            Channels::Rgb(_) | Channels::Hsv(_) => self.map_hsv(|c| Hsv {
                hue: convert::normalize_hue(c.hue + degrees),
                ..c
            }),
        }
    }

    // ─── Blending ────────────────────────────────────────────────────────

    /// Linear interpolation in RGB: `self * (1 - ratio) + other * ratio`.
    ///
    /// Applied to every channel including alpha. `ratio` is not clamped.
    #[must_use]
    pub fn blend(&self, other: &Self, ratio: f64) -> Self {
        let a = self.as_rgb();
        let b = other.as_rgb();
        let lerp = |x: f64, y: f64| (y - x).mul_add(ratio, x);
        let rgb = Rgb {
            red: lerp(a.red, b.red),
            green: lerp(a.green, b.green),
            blue: lerp(a.blue, b.blue),
        };
        Self::from_channels(Channels::Rgb(rgb), lerp(self.alpha(), other.alpha()))
            .to_space(self.space())
    }

    // ─── Luminance ───────────────────────────────────────────────────────

    /// Relative luminance: 0.0 for black, 1.0 for white.
    ///
    /// Channels are clamped to 0.0–1.0, linearized with the sRGB transfer
    /// function and weighted by [`LUMINANCE_WEIGHTS`]. The weighted sum is
    /// divided by the sum of the weights so the white endpoint is exact.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let c = self.as_rgb();
        let (wr, wg, wb) = LUMINANCE_WEIGHTS;
        let r = convert::srgb_to_linear(c.red.clamp(0.0, 1.0));
        let g = convert::srgb_to_linear(c.green.clamp(0.0, 1.0));
        let b = convert::srgb_to_linear(c.blue.clamp(0.0, 1.0));
        (wr * r + wg * g + wb * b) / (wr + wg + wb)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::color::{Color, Space};
    use pretty_assertions::assert_eq;

    fn base() -> Color {
        Color::hsv(90.0, 0.5, 0.5)
    }

    // ── Value ────────────────────────────────────────────────────────────

    #[test]
    fn lighten_by_ratio_clamps_to_one() {
        assert_eq!(base().lighten_by_ratio(10.0), Color::hsv(90.0, 0.5, 1.0));
    }

    #[test]
    fn lighten_by_amount_adds_to_value() {
        assert_eq!(base().lighten_by_amount(0.1), Color::hsv(90.0, 0.5, 0.6));
    }

    #[test]
    fn darken_by_ratio_scales_value() {
        assert_eq!(base().darken_by_ratio(0.5), Color::hsv(90.0, 0.5, 0.25));
    }

    #[test]
    fn darken_by_amount_clamps_to_zero() {
        assert_eq!(base().darken_by_amount(2.3), Color::hsv(90.0, 0.5, 0.0));
    }

    #[test]
    fn value_and_devalue_mirror_lighten_and_darken() {
        assert_eq!(base().value_by_amount(0.2), base().lighten_by_amount(0.2));
        assert_eq!(base().devalue_by_ratio(0.2), base().darken_by_ratio(0.2));
    }

    // ── Saturation ───────────────────────────────────────────────────────

    #[test]
    fn saturate_by_ratio_scales_saturation() {
        assert_eq!(base().saturate_by_ratio(0.02), Color::hsv(90.0, 0.51, 0.5));
    }

    #[test]
    fn saturate_by_negative_amount_desaturates() {
        assert_eq!(base().saturate_by_amount(-0.1), Color::hsv(90.0, 0.4, 0.5));
    }

    #[test]
    fn desaturate_by_ratio_halves_saturation() {
        assert_eq!(base().desaturate_by_ratio(0.5), Color::hsv(90.0, 0.25, 0.5));
    }

    #[test]
    fn desaturate_by_negative_amount_clamps_to_one() {
        assert_eq!(base().desaturate_by_amount(-2.3), Color::hsv(90.0, 1.0, 0.5));
    }

    // ── Hue ──────────────────────────────────────────────────────────────

    #[test]
    fn shift_hue_wraps() {
        assert_eq!(base().shift_hue(359.0), Color::hsv(89.0, 0.5, 0.5));
    }

    #[test]
    fn shift_hue_result_is_canonical() {
        let shifted = Color::hsl(350.0, 0.5, 0.5).shift_hue(-720.0 + 30.0);
        assert!((shifted.as_hsl().hue - 20.0).abs() < 1e-9);
        let shifted = base().shift_hue(-100.0);
        assert!((shifted.as_hsv().hue - 350.0).abs() < 1e-9);
    }

    #[test]
    fn shift_hue_on_rgb_red_gives_cyan() {
        let cyan = Color::rgb(1.0, 0.0, 0.0).shift_hue(180.0);
        assert_eq!(cyan, Color::rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn hsl_saturation_moves_by_the_amount() {
        let color = Color::hsl(0.0, 0.25, 0.25);
        let saturated = color.saturate_by_amount(0.1);
        assert!((saturated.saturation() - 0.35).abs() < 1e-12);
        assert!((saturated.lightness() - 0.25).abs() < 1e-12);
        assert!((color.desaturate_by_ratio(0.5).saturation() - 0.125).abs() < 1e-12);
        assert_eq!(color.saturate_by_amount(2.0).saturation(), 1.0);
    }

    #[test]
    fn saturating_an_hsl_gray_keeps_its_hue() {
        let gray = Color::hsl(200.0, 0.0, 0.5);
        let tinted = gray.saturate_by_amount(0.5);
        assert_eq!(tinted.space(), Space::Hsl);
        assert!((tinted.hue() - 200.0).abs() < 1e-12);
        assert!((tinted.saturation() - 0.5).abs() < 1e-12);
        assert_eq!(tinted, Color::hsl(200.0, 0.5, 0.5));
    }

    // ── Representation preservation ──────────────────────────────────────

    #[test]
    fn results_keep_the_receiver_space() {
        let rgb = Color::rgb(0.2, 0.4, 0.6);
        let hsl = Color::hsl(210.0, 0.5, 0.4);
        assert_eq!(rgb.lighten_by_amount(0.1).space(), Space::Rgb);
        assert_eq!(rgb.shift_hue(10.0).space(), Space::Rgb);
        assert_eq!(hsl.saturate_by_ratio(0.1).space(), Space::Hsl);
        assert_eq!(hsl.shift_hue(10.0).space(), Space::Hsl);
        assert_eq!(base().blend(&rgb, 0.5).space(), Space::Hsv);
    }

    #[test]
    fn manipulation_preserves_alpha() {
        let color = Color::rgba(0.2, 0.4, 0.6, 1.7);
        assert!((color.darken_by_amount(0.1).alpha() - 1.7).abs() < 1e-9);
        assert!((color.shift_hue(90.0).alpha() - 1.7).abs() < 1e-9);
    }

    #[test]
    fn receiver_is_untouched() {
        let color = base();
        let _ = color.lighten_by_amount(0.3);
        assert_eq!(color, Color::hsv(90.0, 0.5, 0.5));
    }

    // ── Blend ────────────────────────────────────────────────────────────

    #[test]
    fn blend_green_with_sixty_percent_blue() {
        let green = Color::rgb(0.0, 1.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        assert_eq!(green.blend(&blue, 0.6), Color::rgb(0.0, 0.4, 0.6));
    }

    #[test]
    fn blend_endpoints() {
        let a = Color::rgb(0.1, 0.7, 0.3);
        let b = Color::hsl(300.0, 0.6, 0.4);
        assert_eq!(a.blend(&b, 0.0), a);
        assert_eq!(a.blend(&b, 1.0), b);
    }

    #[test]
    fn blend_ratio_is_not_clamped() {
        let black = Color::black();
        let gray = Color::rgb(0.5, 0.5, 0.5);
        assert_eq!(black.blend(&gray, 2.0), Color::white());
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_endpoints_are_exact() {
        assert_eq!(Color::white().luminance(), 1.0);
        assert_eq!(Color::black().luminance(), 0.0);
    }

    #[test]
    fn luminance_orders_primaries() {
        let red = Color::rgb(1.0, 0.0, 0.0).luminance();
        let green = Color::rgb(0.0, 1.0, 0.0).luminance();
        let blue = Color::rgb(0.0, 0.0, 1.0).luminance();
        assert!(green > red && red > blue);
    }

    #[test]
    fn luminance_clamps_out_of_range_channels() {
        assert_eq!(Color::rgb(2.0, 2.0, 2.0).luminance(), 1.0);
        assert_eq!(Color::rgb(-1.0, -1.0, -1.0).luminance(), 0.0);
    }
}
