//! Display themes and glyph assignment.
//!
//! - `Theme`: the four built-in glyph pools
//! - `ThemeChoice`: fixed theme or a fresh random one per game
//! - `GlyphAssigner`: lazy, per-pair glyph binding

pub mod glyphs;
pub mod theme;

pub use glyphs::{GlyphAssigner, PLACEHOLDER_GLYPH};
pub use theme::{Theme, ThemeChoice};
