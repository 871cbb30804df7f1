//! Core engine types: RNG, configuration, errors.
//!
//! These are the building blocks shared by the token model, the rules engine
//! and the theme helper.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_PAIR_COUNT};
pub use error::{GameError, Result};
pub use rng::GameRng;
