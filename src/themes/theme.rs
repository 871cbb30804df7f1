//! Named glyph pools.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

const HALLOWEEN: &[&str] = &["👻", "🎃", "💀", "🦇", "🕷", "🕸", "⚰️", "🧟‍♂️", "🧛🏼‍♂️"];

const SPORTS: &[&str] = &[
    "⚽️", "🏀", "🎾", "🎱", "🏈", "🏓", "🏋🏻‍♀️", "🤼‍♂️", "🤺", "🏄🏻‍♂️", "🏊🏼‍♀️", "🏹",
];

const FACES: &[&str] = &["😄", "😂", "😌", "😉", "🤪", "😘", "😎", "😫", "😱", "🤥", "🤮"];

const ANIMALS: &[&str] = &[
    "🐶", "🐭", "🦊", "🐻", "🦁", "🐺", "🐴", "🦆", "🐝", "🦍", "🐇", "🐫",
];

/// A fixed, named pool of display glyphs.
///
/// Glyphs are whole grapheme clusters (some are ZWJ sequences), stored as
/// separate strings so they are never split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Halloween,
    Sports,
    Faces,
    Animals,
}

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Theme; 4] = [Theme::Halloween, Theme::Sports, Theme::Faces, Theme::Animals];

    /// The glyph pool for this theme.
    #[must_use]
    pub const fn glyphs(self) -> &'static [&'static str] {
        match self {
            Theme::Halloween => HALLOWEEN,
            Theme::Sports => SPORTS,
            Theme::Faces => FACES,
            Theme::Animals => ANIMALS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Halloween => "halloween",
            Theme::Sports => "sports",
            Theme::Faces => "faces",
            Theme::Animals => "animals",
        }
    }

    /// Pick a theme uniformly at random.
    pub fn random(rng: &mut GameRng) -> Theme {
        rng.choose(&Self::ALL).copied().unwrap_or(Theme::Halloween)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a game picks its theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeChoice {
    /// Draw a new theme every game.
    #[default]
    Random,
    /// Always use this theme.
    Fixed(Theme),
}

impl ThemeChoice {
    /// Turn the choice into a concrete theme, drawing from `rng` if random.
    pub fn resolve(self, rng: &mut GameRng) -> Theme {
        match self {
            ThemeChoice::Random => Theme::random(rng),
            ThemeChoice::Fixed(theme) => theme,
        }
    }
}
