//! Concentration as a playable session.
//!
//! Ties the rules engine to a theme's glyphs the way a front end needs it:
//! - Select tokens by board index
//! - Read a `TokenView` per token to draw the board
//! - Start a new game, re-picking the theme
//!
//! Rendering itself stays with the caller.

mod session;

pub use session::{Session, TokenView, GLYPH_STREAM, THEME_STREAM};
