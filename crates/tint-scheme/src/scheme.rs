//! Color-harmony schemes — fixed hue offsets from a base color.
//!
//! Every scheme is an ordered list of hue offsets in degrees. Applying it
//! to a base color shifts the base hue by each offset in turn, keeping
//! saturation, lightness/value and alpha. The first offset of every preset
//! is 0, so the base color itself always leads the list.

use tint_color::Color;

/// The named harmony presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Base and its opposite.
    Complementary,
    /// Base plus two hues either side of the complement.
    SplitComplementary,
    /// Split-complementary leaning clockwise.
    SplitComplementaryCw,
    /// Split-complementary leaning counter-clockwise.
    SplitComplementaryCcw,
    /// 120-degree spacing.
    Triadic,
    /// Base plus both square neighbours, skipping the complement.
    Clash,
    /// 90-degree spacing.
    Tetradic,
    FourToneCw,
    FourToneCcw,
    FiveToneA,
    FiveToneB,
    FiveToneC,
    FiveToneD,
    FiveToneE,
    SixToneCw,
    SixToneCcw,
    /// Six close hues, 15 degrees apart.
    Neutral,
    /// Six adjacent hues, 30 degrees apart.
    Analogous,
}

impl SchemeKind {
    /// Hue offsets in degrees, in output order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::SplitComplementary => &[0.0, 150.0, 320.0],
            Self::SplitComplementaryCw => &[0.0, 150.0, 300.0],
            Self::SplitComplementaryCcw => &[0.0, 60.0, 210.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Clash => &[0.0, 90.0, 270.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Self::FourToneCw => &[0.0, 60.0, 180.0, 240.0],
            Self::FourToneCcw => &[0.0, 120.0, 180.0, 300.0],
            Self::FiveToneA => &[0.0, 115.0, 155.0, 205.0, 245.0],
            Self::FiveToneB => &[0.0, 40.0, 90.0, 130.0, 245.0],
            Self::FiveToneC => &[0.0, 50.0, 90.0, 205.0, 320.0],
            Self::FiveToneD => &[0.0, 40.0, 155.0, 270.0, 310.0],
            Self::FiveToneE => &[0.0, 115.0, 230.0, 270.0, 320.0],
            Self::SixToneCw => &[0.0, 30.0, 120.0, 150.0, 240.0, 270.0],
            Self::SixToneCcw => &[0.0, 90.0, 120.0, 210.0, 240.0, 330.0],
            Self::Neutral => &[0.0, 15.0, 30.0, 45.0, 60.0, 75.0],
            Self::Analogous => &[0.0, 30.0, 60.0, 90.0, 120.0, 150.0],
        }
    }

    /// Kebab-case name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::SplitComplementaryCw => "split-complementary-cw",
            Self::SplitComplementaryCcw => "split-complementary-ccw",
            Self::Triadic => "triadic",
            Self::Clash => "clash",
            Self::Tetradic => "tetradic",
            Self::FourToneCw => "four-tone-cw",
            Self::FourToneCcw => "four-tone-ccw",
            Self::FiveToneA => "five-tone-a",
            Self::FiveToneB => "five-tone-b",
            Self::FiveToneC => "five-tone-c",
            Self::FiveToneD => "five-tone-d",
            Self::FiveToneE => "five-tone-e",
            Self::SixToneCw => "six-tone-cw",
            Self::SixToneCcw => "six-tone-ccw",
            Self::Neutral => "neutral",
            Self::Analogous => "analogous",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary, Self::SplitComplementary, Self::SplitComplementaryCw,
            Self::SplitComplementaryCcw, Self::Triadic, Self::Clash, Self::Tetradic,
            Self::FourToneCw, Self::FourToneCcw, Self::FiveToneA, Self::FiveToneB,
            Self::FiveToneC, Self::FiveToneD, Self::FiveToneE, Self::SixToneCw,
            Self::SixToneCcw, Self::Neutral, Self::Analogous,
        ]
    }
}

/// Shift `base` by each offset in `degrees`, in order.
///
/// Offsets may be negative or exceed 360; every resulting hue lands in
/// [0, 360). Results keep the base color's representation.
#[must_use]
pub fn from_degrees(base: &Color, degrees: &[f64]) -> Vec<Color> {
    degrees.iter().map(|&d| base.shift_hue(d)).collect()
}

/// Scheme generation on [`Color`].
///
/// Bring the trait into scope to call `color.triadic_scheme()` and friends.
pub trait Schemes {
    /// Colors shifted by each of `degrees`, in order.
    fn scheme_from_degrees(&self, degrees: &[f64]) -> Vec<Color>;

    /// Colors of a named preset.
    fn scheme(&self, kind: SchemeKind) -> Vec<Color> {
        self.scheme_from_degrees(kind.offsets())
    }

    fn complementary_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Complementary)
    }

    fn split_complementary_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::SplitComplementary)
    }

    fn split_complementary_cw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::SplitComplementaryCw)
    }

    fn split_complementary_ccw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::SplitComplementaryCcw)
    }

    fn triadic_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Triadic)
    }

    fn clash_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Clash)
    }

    fn tetradic_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Tetradic)
    }

    fn four_tone_cw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FourToneCw)
    }

    fn four_tone_ccw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FourToneCcw)
    }

    fn five_tone_a_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FiveToneA)
    }

    fn five_tone_b_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FiveToneB)
    }

    fn five_tone_c_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FiveToneC)
    }

    fn five_tone_d_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FiveToneD)
    }

    fn five_tone_e_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::FiveToneE)
    }

    fn six_tone_cw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::SixToneCw)
    }

    fn six_tone_ccw_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::SixToneCcw)
    }

    fn neutral_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Neutral)
    }

    fn analogous_scheme(&self) -> Vec<Color> {
        self.scheme(SchemeKind::Analogous)
    }
}

impl Schemes for Color {
    fn scheme_from_degrees(&self, degrees: &[f64]) -> Vec<Color> {
        from_degrees(self, degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_color::Space;

    #[test]
    fn complementary_of_red_is_cyan() {
        let scheme = Color::rgb(1.0, 0.0, 0.0).complementary_scheme();
        assert_eq!(scheme.len(), 2);
        assert_eq!(scheme[0], Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(scheme[1].to_rgb(), Color::rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn triadic_of_red_is_primaries() {
        let scheme = Color::rgb(1.0, 0.0, 0.0).triadic_scheme();
        assert_eq!(
            scheme,
            vec![
                Color::rgb(1.0, 0.0, 0.0),
                Color::rgb(0.0, 1.0, 0.0),
                Color::rgb(0.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn every_preset_starts_at_base_with_ascending_offsets() {
        for kind in SchemeKind::all() {
            let offsets = kind.offsets();
            assert_eq!(offsets[0], 0.0, "{}", kind.name());
            assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{}", kind.name());
            assert!(offsets.iter().all(|o| (0.0..360.0).contains(o)), "{}", kind.name());
        }
    }

    #[test]
    fn scheme_lengths_match_their_names() {
        let base = Color::hsl(200.0, 0.6, 0.5);
        assert_eq!(base.split_complementary_scheme().len(), 3);
        assert_eq!(base.clash_scheme().len(), 3);
        assert_eq!(base.tetradic_scheme().len(), 4);
        assert_eq!(base.four_tone_cw_scheme().len(), 4);
        assert_eq!(base.five_tone_c_scheme().len(), 5);
        assert_eq!(base.six_tone_ccw_scheme().len(), 6);
        assert_eq!(base.neutral_scheme().len(), 6);
        assert_eq!(base.analogous_scheme().len(), 6);
    }

    #[test]
    fn arbitrary_offsets_wrap() {
        let base = Color::hsv(100.0, 0.5, 0.5);
        let scheme = base.scheme_from_degrees(&[-100.0, 620.0, 0.0]);
        let hues: Vec<f64> = scheme.iter().map(Color::hue).collect();
        assert!((hues[0] - 0.0).abs() < 1e-9);
        assert!((hues[1] - 0.0).abs() < 1e-9);
        assert!((hues[2] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn scheme_keeps_saturation_lightness_alpha_and_space() {
        let base = Color::hsla(40.0, 0.3, 0.6, 0.5);
        for color in base.five_tone_a_scheme() {
            assert_eq!(color.space(), Space::Hsl);
            assert!((color.saturation() - 0.3).abs() < 1e-9);
            assert!((color.lightness() - 0.6).abs() < 1e-9);
            assert!((color.alpha() - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_offsets_give_empty_scheme() {
        assert!(Color::white().scheme_from_degrees(&[]).is_empty());
    }

    #[test]
    fn name_roundtrip() {
        for &kind in SchemeKind::all() {
            assert_eq!(SchemeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(SchemeKind::from_name("Five-Tone-B"), Some(SchemeKind::FiveToneB));
        assert_eq!(SchemeKind::from_name("pentagram"), None);
    }
}
