// SPDX-License-Identifier: MIT
//
// Conversion engine — sRGB ↔ HSV ↔ HSL.
//
// Single-character variable names (r, g, b, h, s, v, l, c, m, x) follow
// the usual notation for these formulas.
#![allow(clippy::many_single_char_names)]
//
// All functions here are pure and operate on plain channel structs. The
// hue-sector formulas are written so that exact binary fractions survive
// a conversion unchanged: RGB(1, 0.5, 0) becomes HSV(30, 1, 1) exactly,
// and HSL(0, 0.25, 0.25) becomes RGB(0.3125, 0.1875, 0.1875) exactly.
//
// HSV ↔ HSL is routed through RGB.

/// Red, green, blue channels, nominally 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Hue (degrees), saturation and value; saturation and value nominally 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Hue (degrees), saturation and lightness; saturation and lightness nominally 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 {
        // A tiny negative remainder rounds up to exactly 360.0.
        let wrapped = h + 360.0;
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        h
    }
}

// ─── RGB → cylindrical ──────────────────────────────────────────────────────

/// Hue of an RGB triple from the sector of its largest channel.
///
/// Achromatic input (`delta == 0`) has hue 0.
fn rgb_hue(c: Rgb, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == c.red {
        (c.green - c.blue) / delta
    } else if max == c.green {
        (c.blue - c.red) / delta + 2.0
    } else {
        (c.red - c.green) / delta + 4.0
    };
    normalize_hue(sector * 60.0)
}

fn extrema(c: Rgb) -> (f64, f64) {
    let max = c.red.max(c.green).max(c.blue);
    let min = c.red.min(c.green).min(c.blue);
    (max, min)
}

/// Convert RGB to HSV.
#[must_use]
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let (max, min) = extrema(c);
    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        hue: rgb_hue(c, max, delta),
        saturation,
        value: max,
    }
}

/// Convert RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (max, min) = extrema(c);
    let delta = max - min;
    let lightness = (max + min) / 2.0;
    let saturation = if lightness == 0.0 || lightness == 1.0 || delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - 2.0f64.mul_add(lightness, -1.0).abs())
    };
    Hsl {
        hue: rgb_hue(c, max, delta),
        saturation,
        lightness,
    }
}

// ─── Cylindrical → RGB ──────────────────────────────────────────────────────

/// Rebuild RGB from hue, chroma and the offset `m` added to every channel.
fn from_chroma(hue: f64, chroma: f64, m: f64) -> Rgb {
    let h = normalize_hue(hue) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = if h < 1.0 {
        (chroma, x, 0.0)
    } else if h < 2.0 {
        (x, chroma, 0.0)
    } else if h < 3.0 {
        (0.0, chroma, x)
    } else if h < 4.0 {
        (0.0, x, chroma)
    } else if h < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    Rgb {
        red: r + m,
        green: g + m,
        blue: b + m,
    }
}

/// Convert HSV to RGB.
#[must_use]
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let chroma = c.value * c.saturation;
    from_chroma(c.hue, chroma, c.value - chroma)
}

/// Convert HSL to RGB.
#[must_use]
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let chroma = (1.0 - 2.0f64.mul_add(c.lightness, -1.0).abs()) * c.saturation;
    from_chroma(c.hue, chroma, c.lightness - chroma / 2.0)
}

// ─── HSV ↔ HSL ──────────────────────────────────────────────────────────────

/// Convert HSV to HSL (through RGB).
#[must_use]
pub fn hsv_to_hsl(c: Hsv) -> Hsl {
    rgb_to_hsl(hsv_to_rgb(c))
}

/// Convert HSL to HSV (through RGB).
#[must_use]
pub fn hsl_to_hsv(c: Hsl) -> Hsv {
    rgb_to_hsv(hsl_to_rgb(c))
}

// ─── sRGB transfer function ─────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
