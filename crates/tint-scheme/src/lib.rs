//! # tint-scheme — color harmonies built on `tint-color`
//!
//! Generates related colors from a base color by rotating its hue, and
//! measures how well two colors contrast.
//!
//! # Architecture
//!
//! ```text
//! Color + SchemeKind (or raw degrees)
//!     │
//!     ▼
//! scheme.rs:   shift the base hue by each offset → Vec<Color>
//!     │
//!     ▼
//! contrast.rs: luminance ratio between any two members
//! ```
//!
//! Scheme members keep the base color's saturation, lightness/value,
//! alpha and representation. Only the hue moves.

pub mod contrast;
pub mod scheme;

pub use contrast::contrast_ratio;
pub use scheme::{SchemeKind, Schemes};
