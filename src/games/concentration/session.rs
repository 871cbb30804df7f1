//! Concentration session: engine plus glyphs.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::cards::Token;
use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::rules::{GameEngine, Selection};
use crate::themes::{GlyphAssigner, Theme};

/// Context name of the theme-pick stream.
pub const THEME_STREAM: &str = "theme";

/// Context name of the glyph-draw stream.
pub const GLYPH_STREAM: &str = "glyphs";

/// How one token should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TokenView {
    /// Back side showing.
    FaceDown,
    /// Front side showing this glyph.
    FaceUp(&'static str),
    /// Matched and folded down: removed from the board.
    Hidden,
}

/// A playable game: the rules engine plus the glyphs drawn on its tokens.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    engine: GameEngine,
    glyphs: GlyphAssigner,
    theme_rng: GameRng,
}

impl Session {
    /// Start a session. Deck, theme and glyphs use separate streams of
    /// `config.seed`.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let engine = GameEngine::from_config(config)?;

        let root = GameRng::new(config.seed);
        let mut theme_rng = root.for_context(THEME_STREAM);
        let theme = config.theme.resolve(&mut theme_rng);
        let glyphs = GlyphAssigner::new(theme, root.for_context(GLYPH_STREAM));

        debug!(pair_count = config.pair_count, theme = %theme, "session started");

        Ok(Self {
            config: config.clone(),
            engine,
            glyphs,
            theme_rng,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphAssigner {
        &self.glyphs
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.glyphs.theme()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.engine.score()
    }

    #[must_use]
    pub fn flip_count(&self) -> u64 {
        self.engine.flip_count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    /// Forward a selection to the engine.
    pub fn select(&mut self, index: usize) -> Result<Selection> {
        self.engine.select_token(index)
    }

    /// Reset the board and pick the theme again.
    ///
    /// With `ThemeChoice::Random` this usually changes the theme. Glyph
    /// bindings are always cleared.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset_game();
        let theme = self.config.theme.resolve(&mut self.theme_rng);
        self.glyphs.set_theme(theme);
        debug!(theme = %theme, "new game");
    }

    /// Render state of the token at `index`, drawing its glyph if it is
    /// face-up for the first time.
    pub fn view(&mut self, index: usize) -> Result<TokenView> {
        let token = self.engine.token(index).ok_or(GameError::IndexOutOfRange {
            index,
            len: self.engine.tokens().len(),
        })?;

        Ok(render(&token, &mut self.glyphs))
    }

    /// Render state of every token, in board order.
    pub fn views(&mut self) -> Vec<TokenView> {
        let Self { engine, glyphs, .. } = self;
        engine
            .tokens()
            .iter()
            .map(|token| render(token, glyphs))
            .collect()
    }
}

/// Face-up wins over matched: a freshly completed pair stays visible until
/// the next selection folds it down, then leaves the board.
fn render(token: &Token, glyphs: &mut GlyphAssigner) -> TokenView {
    if token.is_face_up() {
        TokenView::FaceUp(glyphs.glyph_for(token))
    } else if token.is_matched() {
        TokenView::Hidden
    } else {
        TokenView::FaceDown
    }
}
