//! tristimulus provides deterministic, stateless conversions between the
//! color models of a color picker: 8-bit sRGB, HSV, CIE-XYZ (D65) and
//! CIE-Lab.
//!
//! Every conversion is a pure function over small value records. None of
//! them can fail: out-of-range inputs are normalized or clamped rather than
//! rejected. The one degradation signal is [`ClipFlags`], returned by
//! conversions into the sRGB gamut to report channels that had to be
//! clamped.

#![deny(missing_docs)]

mod convert;
mod gamut;
mod hsv;
mod lab;
mod math;
mod rgb;
mod xyz;

pub use gamut::{ClipFlags, GAMUT_EPSILON};
pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Rgb;
pub use xyz::Xyz;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;
