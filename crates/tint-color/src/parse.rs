// SPDX-License-Identifier: MIT
//
// Parser — builds a Color from CSS text, a structured value object, or a
// numeric sequence.
//
// CSS text goes through the grammar classifier first; this module only
// scales the classified numbers into the engine's ranges:
//
//   #rgb / #rrggbb     each digit group / (16^len - 1)
//   rgb(I, I, I)       each channel / 255, unclamped
//   rgb(P%, P%, P%)    each channel / 100, unclamped
//   hsl(H, S%, L%)     hue verbatim, S and L / 100
//   alpha              verbatim, unclamped
//
// Structured inputs pick the authoritative space directly; no conversion
// happens at construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Channels, Color};
use crate::convert::{Hsl, Hsv, Rgb};
use crate::error::{Error, Result};
use crate::grammar::{self, ChannelUnit, Syntax};

const fn opaque() -> f64 {
    1.0
}

/// `{red, green, blue, alpha?}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RgbaValues {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// `{hue, saturation, value, alpha?}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HsvaValues {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// `{hue, saturation, lightness, alpha?}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HslaValues {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// A structured color: exactly one channel set plus optional alpha.
///
/// Deserializes from a JSON-like map. Mixed or unknown field sets such as
/// `{hue, saturation, value, lightness}` match no variant and are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValues {
    Rgb(RgbaValues),
    Hsv(HsvaValues),
    Hsl(HslaValues),
}

/// Any accepted construction input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// CSS color text.
    Css(String),
    /// A structured channel map.
    Values(ColorValues),
    /// `[red, green, blue]` or `[red, green, blue, alpha]`.
    Sequence(Vec<f64>),
}

// ─── CSS text ────────────────────────────────────────────────────────────────

/// Parse CSS color text.
///
/// # Errors
///
/// Returns [`Error::InvalidColorFormat`] if `text` is not a legal CSS color.
pub fn parse_css(text: &str) -> Result<Color> {
    let color = match grammar::classify(text) {
        Syntax::Hex(digits) => parse_hex(digits),
        Syntax::Rgb {
            channels,
            unit,
            alpha,
        } => {
            let scale = match unit {
                ChannelUnit::Integer => 255.0,
                ChannelUnit::Percentage => 100.0,
            };
            let [r, g, b] = channels.map(|c| c / scale);
            Some(Color::rgba(r, g, b, alpha.unwrap_or(1.0)))
        }
        Syntax::Hsl {
            hue,
            saturation,
            lightness,
            alpha,
        } => Some(Color::hsla(
            hue,
            saturation / 100.0,
            lightness / 100.0,
            alpha.unwrap_or(1.0),
        )),
        Syntax::Named((r, g, b, a)) => Some(Color::rgb8(r, g, b).set_alpha(f64::from(a) / 255.0)),
        Syntax::Invalid => None,
    };
    color.ok_or_else(|| {
        log::debug!("rejected color text {text:?}");
        Error::InvalidColorFormat(text.to_owned())
    })
}

/// Parse `rgb` or `rrggbb` hex digits (already validated, no `#`).
///
/// The digit run is split into three equal groups, each scaled by
/// `16^len - 1` so that `f` and `ff` both mean 1.0.
fn parse_hex(digits: &str) -> Option<Color> {
    let width = digits.len() / 3;
    let max = f64::from((1u32 << (4 * width)) - 1);
    let channel = |i: usize| -> Option<f64> {
        let group = digits.get(i * width..(i + 1) * width)?;
        u32::from_str_radix(group, 16).ok().map(|v| f64::from(v) / max)
    };
    Some(Color::rgb(channel(0)?, channel(1)?, channel(2)?))
}

// ─── Structured inputs ───────────────────────────────────────────────────────

impl From<ColorValues> for Color {
    fn from(values: ColorValues) -> Self {
        match values {
            ColorValues::Rgb(v) => Self::rgba(v.red, v.green, v.blue, v.alpha),
            ColorValues::Hsv(v) => Self::hsva(v.hue, v.saturation, v.value, v.alpha),
            ColorValues::Hsl(v) => Self::hsla(v.hue, v.saturation, v.lightness, v.alpha),
        }
    }
}

impl From<Color> for ColorValues {
    /// The authoritative channels of `color`, in its own space.
    fn from(color: Color) -> Self {
        let alpha = color.alpha();
        match color.channels() {
            Channels::Rgb(Rgb { red, green, blue }) => Self::Rgb(RgbaValues {
                red,
                green,
                blue,
                alpha,
            }),
            Channels::Hsv(Hsv {
                hue,
                saturation,
                value,
            }) => Self::Hsv(HsvaValues {
                hue,
                saturation,
                value,
                alpha,
            }),
            Channels::Hsl(Hsl {
                hue,
                saturation,
                lightness,
            }) => Self::Hsl(HslaValues {
                hue,
                saturation,
                lightness,
                alpha,
            }),
        }
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[f64; 4]> for Color {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = Error;

    /// Interpret a 3- or 4-element sequence positionally as RGB(+alpha).
    fn try_from(channels: &[f64]) -> Result<Self> {
        match *channels {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => {
                log::debug!("rejected channel sequence of length {}", channels.len());
                Err(Error::InvalidColorFormat(format!("{channels:?}")))
            }
        }
    }
}

impl TryFrom<ColorInput> for Color {
    type Error = Error;

    fn try_from(input: ColorInput) -> Result<Self> {
        match input {
            ColorInput::Css(text) => parse_css(&text),
            ColorInput::Values(values) => Ok(values.into()),
            ColorInput::Sequence(channels) => Self::try_from(channels.as_slice()),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_css(s)
    }
}

/// Read a color from any serde data format.
///
/// # Errors
///
/// Returns [`Error::InvalidColorFormat`] unless the data is CSS text, a
/// single recognized channel map, or a 3- or 4-element number sequence.
pub fn from_deserializer<'de, D>(deserializer: D) -> Result<Color>
where
    D: serde::Deserializer<'de>,
{
    let input = ColorInput::deserialize(deserializer).map_err(|e| {
        log::debug!("rejected structured color: {e}");
        Error::InvalidColorFormat(e.to_string())
    })?;
    Color::try_from(input)
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        from_deserializer(deserializer).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Color {
    /// Serializes as the structured channel map of the authoritative space.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ColorValues::from(self.clone()).serialize(serializer)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
