//! # concentration
//!
//! A single-player memory-matching ("Concentration") game engine.
//!
//! A deck of paired tokens is dealt face-down. The player turns up two at a
//! time; a matching pair stays out of play and scores, a mismatch costs
//! points when the player should have known better.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine never renders or calls back. A front
//!    end calls `select_token`, then redraws from the observable state.
//!
//! 2. **Deterministic**: All randomness comes from an injected, seedable
//!    `GameRng`. Same seed, same game.
//!
//! 3. **Explicit Transitions**: Pair ids come from an explicit allocator and
//!    the "one face-up token" rule is a named operation, not a side effect.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Tokens and pair ids
//! - `rules`: The game engine and scoring
//! - `themes`: Glyph pools and lazy glyph assignment
//! - `games`: A ready-made session combining engine and glyphs
//!
//! ## Example
//!
//! ```
//! use concentration::{GameConfig, Session, Theme, ThemeChoice, TokenView};
//!
//! let config = GameConfig::new(6)
//!     .with_seed(7)
//!     .with_theme(ThemeChoice::Fixed(Theme::Animals));
//! let mut session = Session::new(&config).unwrap();
//!
//! session.select(0).unwrap();
//! assert!(matches!(session.view(0).unwrap(), TokenView::FaceUp(_)));
//! assert_eq!(session.flip_count(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod themes;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, Result};

pub use crate::cards::{PairId, PairIdAllocator, Token};

pub use crate::rules::{GameEngine, Selection, MATCH_REWARD, MISMATCH_PENALTY};

pub use crate::themes::{GlyphAssigner, Theme, ThemeChoice, PLACEHOLDER_GLYPH};

pub use crate::games::{Session, TokenView};
