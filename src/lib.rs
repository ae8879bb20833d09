//! Generate a 16-color terminal palette from an image.
//!
//! The binary takes a backend name, an image path and an optional light
//! flag, runs the selected backend and prints the palette as a JSON array
//! of `#rrggbb` codes.

pub mod backends;
pub mod error;
pub mod models;
pub mod services;
