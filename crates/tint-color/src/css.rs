// SPDX-License-Identifier: MIT
//
// CSS serializer.
//
// `to_css` is the canonical hex form. `Display` renders the color's own
// representation in functional notation: RGB as `rgb()`/`rgba()`, HSL as
// `hsl()`/`hsla()`. HSV has no CSS notation and is rendered through HSL.

use std::fmt;

use crate::color::{Channels, Color};
use crate::convert::{self, Hsl};

impl Color {
    /// Render as `#RRGGBB` hex, with `bytes_per_channel` bytes per channel.
    ///
    /// Each channel is clamped to 0.0–1.0, scaled to
    /// `256^bytes_per_channel - 1` and rounded to the nearest integer.
    /// `bytes_per_channel` is clamped to 1–4; 1 gives the usual
    /// `#RRGGBB`, 2 gives `#RRRRGGGGBBBB`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_css(&self, bytes_per_channel: u32) -> String {
        let bytes = bytes_per_channel.clamp(1, 4);
        let width = 2 * bytes as usize;
        let max = ((1u64 << (8 * bytes)) - 1) as f64;
        let c = self.as_rgb();
        let [r, g, b] = [c.red, c.green, c.blue].map(|v| scale(v, max));
        format!("#{r:0width$X}{g:0width$X}{b:0width$X}")
    }

    /// Render as `#RRGGBB` hex (one byte per channel).
    #[inline]
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_css(1)
    }
}

/// Clamp `v` to 0.0–1.0 and scale it to an integer in `0..=max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(v: f64, max: f64) -> u64 {
    // Safe: clamp guarantees 0.0 <= value <= max before truncation.
    (v.clamp(0.0, 1.0) * max).round() as u64
}

/// Format a number with at most three decimals and no trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 turns -0.0 into 0.0.
        let rounded = (self.0 * 1000.0).round() / 1000.0 + 0.0;
        write!(f, "{rounded}")
    }
}

fn write_hsl(f: &mut fmt::Formatter<'_>, c: Hsl, alpha: f64) -> fmt::Result {
    let h = Num(convert::normalize_hue(c.hue));
    let s = Num(c.saturation * 100.0);
    let l = Num(c.lightness * 100.0);
    if alpha == 1.0 {
        write!(f, "hsl({h}, {s}%, {l}%)")
    } else {
        write!(f, "hsla({h}, {s}%, {l}%, {})", Num(alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channels() {
            Channels::Rgb(c) => {
                let [r, g, b] = [c.red, c.green, c.blue].map(|v| scale(v, 255.0));
                if self.alpha() == 1.0 {
                    write!(f, "rgb({r}, {g}, {b})")
                } else {
                    write!(f, "rgba({r}, {g}, {b}, {})", Num(self.alpha()))
                }
            }
            Channels::Hsv(_) => write_hsl(f, self.as_hsl(), self.alpha()),
            Channels::Hsl(c) => write_hsl(f, c, self.alpha()),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, [a, b, c]) = match self.channels() {
            Channels::Rgb(c) => ("rgb", [c.red, c.green, c.blue]),
            Channels::Hsv(c) => ("hsv", [c.hue, c.saturation, c.value]),
            Channels::Hsl(c) => ("hsl", [c.hue, c.saturation, c.lightness]),
        };
        if self.alpha() == 1.0 {
            write!(f, "Color::{name}({a}, {b}, {c})")
        } else {
            write!(f, "Color::{name}a({a}, {b}, {c}, {})", self.alpha())
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
