//! Game rules: deck construction, turn resolution and scoring.
//!
//! `GameEngine` is the whole state machine. It is driven by a presentation
//! layer through `select_token` and `reset_game` and never calls back out.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::Selection;

/// Points for completing a pair.
pub const MATCH_REWARD: i64 = 2;

/// Points lost per repeat mistake on a mismatch.
pub const MISMATCH_PENALTY: i64 = 1;
