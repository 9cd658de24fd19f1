//! glyph-core
//!
//! Core library for the content-addressed license registry and glyph
//! resolver.
//!
//! A *glyph* is a small reference document (`LICENSE.glyph`) that points at a
//! canonical license text by content identifier instead of embedding the text
//! itself. This crate defines identifier derivation, the on-disk registry
//! store, glyph parsing, resolution/verification, and conversion of
//! traditional license files into glyphs.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, CI checks, etc.).

pub mod cid;
pub mod convert;
pub mod glyph;
pub mod registry;
pub mod resolver;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
