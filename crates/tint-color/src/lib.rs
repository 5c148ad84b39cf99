// SPDX-License-Identifier: MIT
//
// tint-color — color value engine for tint.
//
// Parses CSS3 color syntax into a Color that stores one authoritative
// representation (RGB, HSV or HSL) plus alpha, converts between those
// spaces exactly, manipulates colors without mutation, and writes them
// back out as CSS text.
//
//   text ─► grammar ─► parse ─► Color ─► adjust ─► css ─► text
//                                 │
//                              convert (on demand, memoized)
//
// All arithmetic is plain sRGB in f64. There is no gamut mapping and no
// color management: out-of-range channels are stored as given and only
// clamped where an operation says so.

pub mod adjust;
pub mod color;
pub mod convert;
pub mod css;
pub mod error;
pub mod grammar;
pub mod named;
pub mod parse;

pub use color::{Color, Space};
pub use error::{Error, Result};
pub use grammar::is_valid;
pub use parse::{ColorInput, ColorValues, from_deserializer};
