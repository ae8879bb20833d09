//! Palette backends
//!
//! `colorthief`, `colorz` and `haishoku` decode the image and quantize it
//! in-process. `schemer2` and `wal` run an external program and parse the
//! hex codes it prints.

pub mod colorthief;
pub mod colorz;
pub mod haishoku;
pub mod schemer2;
pub mod wal;

pub use colorthief::ColorThiefBackend;
pub use colorz::ColorzBackend;
pub use haishoku::HaishokuBackend;
pub use schemer2::Schemer2Backend;
pub use wal::WalBackend;
