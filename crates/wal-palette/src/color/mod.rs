//! Color types and conversion utilities
//!
//! [`Rgb`] is 8-bit sRGB, the unit every backend reads and writes. HSV
//! conversions back hue ordering and value clamping.

mod rgb;
mod space;

pub use rgb::Rgb;
