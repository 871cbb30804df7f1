//! Game configuration.
//!
//! Callers describe a game with `GameConfig` and hand it to
//! `GameEngine::from_config` or `Session::new`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::themes::ThemeChoice;

/// Pairs on the default board (twelve tokens).
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs in the deck. Must be at least 1.
    pub pair_count: usize,

    /// Seed for every random stream in the game.
    /// Same seed produces the same shuffles and glyph draws.
    pub seed: u64,

    /// Glyph theme, fixed or drawn at random per game.
    pub theme: ThemeChoice,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            seed: 42,
            theme: ThemeChoice::Random,
        }
    }
}

impl GameConfig {
    /// Create a config with the given pair count and default seed/theme.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the theme choice.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeChoice) -> Self {
        self.theme = theme;
        self
    }

    /// Number of tokens a deck built from this config holds.
    #[must_use]
    ///
    /// Saturates for counts `validate` would reject.
    pub fn token_count(&self) -> usize {
        self.pair_count.saturating_mul(2)
    }

    /// Check the config can build a game.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(GameError::invalid("pair count must be at least 1"));
        }
        if self.pair_count >= u32::MAX as usize || self.pair_count > usize::MAX / 2 {
            return Err(GameError::invalid(format!(
                "pair count {} exceeds the pair id space",
                self.pair_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::Theme;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count, DEFAULT_PAIR_COUNT);
        assert_eq!(config.token_count(), 12);
        assert_eq!(config.seed, 42);
        assert_eq!(config.theme, ThemeChoice::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_pair_count(8)
            .with_seed(123)
            .with_theme(ThemeChoice::Fixed(Theme::Animals));

        assert_eq!(config.pair_count, 8);
        assert_eq!(config.seed, 123);
        assert_eq!(config.theme, ThemeChoice::Fixed(Theme::Animals));
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let err = GameConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument { .. }));
    }

    #[test]
    fn test_oversized_pair_count_rejected() {
        for pair_count in [usize::MAX / 2 + 1, usize::MAX] {
            let config = GameConfig::new(pair_count);
            assert!(matches!(
                config.validate(),
                Err(GameError::InvalidArgument { .. })
            ));
            assert_eq!(config.token_count(), usize::MAX);
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(4)
            .with_seed(7)
            .with_theme(ThemeChoice::Fixed(Theme::Sports));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
