// SPDX-License-Identifier: MIT
//
// The Color value type.
//
// A Color stores exactly one authoritative representation (RGB, HSV or
// HSL) plus alpha. The other two representations are derived on first
// access and memoized in `OnceLock`s, so a Color can be shared across
// threads and read concurrently without synchronization on the caller's
// side. Nothing here ever mutates the authoritative channels: every
// setter and every manipulation returns a new Color.
//
// Channel values are not clamped on construction. Alpha in particular is
// kept verbatim, including negative values and values above 1.0, and it
// takes part in equality.

use std::sync::OnceLock;

use crate::convert::{self, Hsl, Hsv, Rgb};

/// Absolute per-channel tolerance used by `PartialEq`.
pub const EPSILON: f64 = 1e-9;

/// The representation a [`Color`] stores authoritatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Rgb,
    Hsv,
    Hsl,
}

#[derive(Clone, Copy)]
pub(crate) enum Channels {
    Rgb(Rgb),
    Hsv(Hsv),
    Hsl(Hsl),
}

/// Representations computed on demand from the authoritative one.
#[derive(Clone)]
struct Derived {
    rgb: OnceLock<Rgb>,
    hsv: OnceLock<Hsv>,
    hsl: OnceLock<Hsl>,
}

impl Derived {
    const fn new() -> Self {
        Self {
            rgb: OnceLock::new(),
            hsv: OnceLock::new(),
            hsl: OnceLock::new(),
        }
    }
}

/// An immutable color value.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let red: Color = "#f00".parse().unwrap();
/// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
///
/// let cyan = red.shift_hue(180.0);
/// assert_eq!(cyan.to_css(1), "#00FFFF");
///
/// // Hue is compared modulo 360.
/// assert_eq!(Color::hsl(203.0, 0.5, 0.4), Color::hsl(563.0, 0.5, 0.4));
/// ```
#[derive(Clone)]
pub struct Color {
    channels: Channels,
    alpha: f64,
    derived: Derived,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    pub(crate) const fn from_channels(channels: Channels, alpha: f64) -> Self {
        Self {
            channels,
            alpha,
            derived: Derived::new(),
        }
    }

    /// Create an opaque color from RGB channels (nominally 0.0 to 1.0).
    #[inline]
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Create a color from RGB channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::from_channels(Channels::Rgb(Rgb { red, green, blue }), alpha)
    }

    /// Create an opaque color from hue (degrees), saturation and value.
    #[inline]
    #[must_use]
    pub const fn hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self::hsva(hue, saturation, value, 1.0)
    }

    /// Create a color from hue, saturation and value with alpha.
    #[inline]
    #[must_use]
    pub const fn hsva(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        Self::from_channels(
            Channels::Hsv(Hsv {
                hue,
                saturation,
                value,
            }),
            alpha,
        )
    }

    /// Create an opaque color from hue (degrees), saturation and lightness.
    #[inline]
    #[must_use]
    pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// Create a color from hue, saturation and lightness with alpha.
    #[inline]
    #[must_use]
    pub const fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::from_channels(
            Channels::Hsl(Hsl {
                hue,
                saturation,
                lightness,
            }),
            alpha,
        )
    }

    /// Create an opaque color from 8-bit RGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Pure black.
    #[must_use]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Pure white.
    #[must_use]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Fully transparent black, the value of the `transparent` keyword.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    // ─── Representation access ───────────────────────────────────────────

    /// The representation this color stores authoritatively.
    #[must_use]
    pub const fn space(&self) -> Space {
        match self.channels {
            Channels::Rgb(_) => Space::Rgb,
            Channels::Hsv(_) => Space::Hsv,
            Channels::Hsl(_) => Space::Hsl,
        }
    }

    pub(crate) const fn channels(&self) -> Channels {
        self.channels
    }

    /// RGB channels, converted and cached on first access if needed.
    #[must_use]
    pub fn as_rgb(&self) -> Rgb {
        match self.channels {
            Channels::Rgb(c) => c,
            Channels::Hsv(c) => *self.derived.rgb.get_or_init(|| convert::hsv_to_rgb(c)),
            Channels::Hsl(c) => *self.derived.rgb.get_or_init(|| convert::hsl_to_rgb(c)),
        }
    }

    /// HSV channels, converted and cached on first access if needed.
    ///
    /// The stored hue is returned as-is when the color is authoritatively HSV.
    #[must_use]
    pub fn as_hsv(&self) -> Hsv {
        match self.channels {
            Channels::Hsv(c) => c,
            Channels::Rgb(_) | Channels::Hsl(_) => *self
                .derived
                .hsv
                .get_or_init(|| convert::rgb_to_hsv(self.as_rgb())),
        }
    }

    /// HSL channels, converted and cached on first access if needed.
    ///
    /// The stored hue is returned as-is when the color is authoritatively HSL.
    #[must_use]
    pub fn as_hsl(&self) -> Hsl {
        match self.channels {
            Channels::Hsl(c) => c,
            Channels::Rgb(_) | Channels::Hsv(_) => *self
                .derived
                .hsl
                .get_or_init(|| convert::rgb_to_hsl(self.as_rgb())),
        }
    }

    /// This color as an RGB-authoritative color.
    #[must_use]
    pub fn to_rgb(&self) -> Self {
        match self.channels {
            Channels::Rgb(_) => self.clone(),
            _ => Self::from_channels(Channels::Rgb(self.as_rgb()), self.alpha),
        }
    }

    /// This color as an HSV-authoritative color.
    #[must_use]
    pub fn to_hsv(&self) -> Self {
        match self.channels {
            Channels::Hsv(_) => self.clone(),
            _ => Self::from_channels(Channels::Hsv(self.as_hsv()), self.alpha),
        }
    }

    /// This color as an HSL-authoritative color.
    #[must_use]
    pub fn to_hsl(&self) -> Self {
        match self.channels {
            Channels::Hsl(_) => self.clone(),
            _ => Self::from_channels(Channels::Hsl(self.as_hsl()), self.alpha),
        }
    }

    /// This color re-expressed in `space`.
    #[must_use]
    pub fn to_space(&self, space: Space) -> Self {
        match space {
            Space::Rgb => self.to_rgb(),
            Space::Hsv => self.to_hsv(),
            Space::Hsl => self.to_hsl(),
        }
    }

    /// Whether hue and saturation are read from HSL rather than HSV.
    const fn cylinder_is_hsl(&self) -> bool {
        matches!(self.channels, Channels::Hsl(_))
    }

    // ─── Getters ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn red(&self) -> f64 {
        self.as_rgb().red
    }

    #[must_use]
    pub fn green(&self) -> f64 {
        self.as_rgb().green
    }

    #[must_use]
    pub fn blue(&self) -> f64 {
        self.as_rgb().blue
    }

    /// Hue in degrees, canonicalized into [0, 360).
    #[must_use]
    pub fn hue(&self) -> f64 {
        let hue = if self.cylinder_is_hsl() {
            self.as_hsl().hue
        } else {
            self.as_hsv().hue
        };
        convert::normalize_hue(hue)
    }

    /// Saturation: HSL saturation for HSL colors, HSV saturation otherwise.
    #[must_use]
    pub fn saturation(&self) -> f64 {
        if self.cylinder_is_hsl() {
            self.as_hsl().saturation
        } else {
            self.as_hsv().saturation
        }
    }

    /// HSV value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.as_hsv().value
    }

    /// HSL lightness.
    #[must_use]
    pub fn lightness(&self) -> f64 {
        self.as_hsl().lightness
    }

    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    // ─── Setters ─────────────────────────────────────────────────────────
    //
    // Each returns a new color in the space its channel belongs to. Hue
    // and saturation exist in both cylinders and follow `saturation()`.

    #[must_use]
    pub fn set_red(&self, red: f64) -> Self {
        Self::from_channels(Channels::Rgb(Rgb { red, ..self.as_rgb() }), self.alpha)
    }

    #[must_use]
    pub fn set_green(&self, green: f64) -> Self {
        Self::from_channels(Channels::Rgb(Rgb { green, ..self.as_rgb() }), self.alpha)
    }

    #[must_use]
    pub fn set_blue(&self, blue: f64) -> Self {
        Self::from_channels(Channels::Rgb(Rgb { blue, ..self.as_rgb() }), self.alpha)
    }

    #[must_use]
    pub fn set_hue(&self, hue: f64) -> Self {
        let channels = if self.cylinder_is_hsl() {
            Channels::Hsl(Hsl { hue, ..self.as_hsl() })
        } else {
            Channels::Hsv(Hsv { hue, ..self.as_hsv() })
        };
        Self::from_channels(channels, self.alpha)
    }

    #[must_use]
    pub fn set_saturation(&self, saturation: f64) -> Self {
        let channels = if self.cylinder_is_hsl() {
            Channels::Hsl(Hsl {
                saturation,
                ..self.as_hsl()
            })
        } else {
            Channels::Hsv(Hsv {
                saturation,
                ..self.as_hsv()
            })
        };
        Self::from_channels(channels, self.alpha)
    }

    #[must_use]
    pub fn set_value(&self, value: f64) -> Self {
        Self::from_channels(Channels::Hsv(Hsv { value, ..self.as_hsv() }), self.alpha)
    }

    #[must_use]
    pub fn set_lightness(&self, lightness: f64) -> Self {
        Self::from_channels(
            Channels::Hsl(Hsl {
                lightness,
                ..self.as_hsl()
            }),
            self.alpha,
        )
    }

    /// Return a copy with the given alpha, in the same space.
    #[must_use]
    pub fn set_alpha(&self, alpha: f64) -> Self {
        Self::from_channels(self.channels, alpha)
    }
}

impl PartialEq for Color {
    /// Colors are equal when their RGB channels and alpha agree within
    /// [`EPSILON`], whatever space each one stores.
    fn eq(&self, other: &Self) -> bool {
        let a = self.as_rgb();
        let b = other.as_rgb();
        (a.red - b.red).abs() < EPSILON
            && (a.green - b.green).abs() < EPSILON
            && (a.blue - b.blue).abs() < EPSILON
            && (self.alpha - other.alpha).abs() < EPSILON
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::black()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
