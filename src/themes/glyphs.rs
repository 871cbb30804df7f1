//! Lazy pair-to-glyph binding.
//!
//! A glyph is drawn the first time a token is displayed and stays bound to
//! the token's `PairId` until the next reset. Binding by id is what makes
//! both halves of a pair look the same.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::theme::Theme;
use crate::cards::{PairId, Token};
use crate::core::GameRng;

/// Shown for tokens that could not get a glyph because the pool ran dry.
pub const PLACEHOLDER_GLYPH: &str = "?";

/// Draws glyphs without replacement from the active theme.
#[derive(Clone, Debug)]
pub struct GlyphAssigner {
    theme: Theme,
    remaining: Vec<&'static str>,
    assigned: FxHashMap<PairId, &'static str>,
    rng: GameRng,
}

impl GlyphAssigner {
    #[must_use]
    pub fn new(theme: Theme, rng: GameRng) -> Self {
        Self {
            theme,
            remaining: theme.glyphs().to_vec(),
            assigned: FxHashMap::default(),
            rng,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Glyph for a token, binding one on first display.
    pub fn glyph_for(&mut self, token: &Token) -> &'static str {
        self.glyph_for_id(token.id())
    }

    /// Glyph for a pair id, binding one on first display.
    ///
    /// Returns `PLACEHOLDER_GLYPH` without binding when the pool is empty.
    pub fn glyph_for_id(&mut self, id: PairId) -> &'static str {
        if let Some(&glyph) = self.assigned.get(&id) {
            return glyph;
        }
        if self.remaining.is_empty() {
            warn!(theme = %self.theme, pair = %id, "glyph pool exhausted");
            return PLACEHOLDER_GLYPH;
        }

        let pick = self.rng.gen_range_usize(0..self.remaining.len());
        let glyph = self.remaining.swap_remove(pick);
        self.assigned.insert(id, glyph);
        glyph
    }

    /// Glyph already bound to `id`, without drawing.
    #[must_use]
    pub fn assigned(&self, id: PairId) -> Option<&'static str> {
        self.assigned.get(&id).copied()
    }

    /// Glyphs still available to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Drop every binding and refill the pool.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.remaining = self.theme.glyphs().to_vec();
    }

    /// Switch to another theme. Clears bindings even if the theme is unchanged.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.reset();
    }
}
