//! The Concentration state machine.
//!
//! ## Turn Flow
//!
//! Between calls the board holds at most one "pending" token: face-up and
//! not yet matched. A selection either opens a new turn (no pending token)
//! or resolves the turn against the pending token:
//!
//! - Same pair: both are matched, score +2.
//! - Different pair: the second token is turned up next to the first, and
//!   the player loses a point for each repeat mistake.
//!
//! The two face-up tokens of a resolved turn stay visible until the next
//! selection, which folds every other token face-down.
//!
//! ```
//! use concentration::core::GameRng;
//! use concentration::rules::{GameEngine, Selection};
//!
//! let mut engine = GameEngine::new(3, GameRng::new(7)).unwrap();
//! assert_eq!(engine.tokens().len(), 6);
//!
//! assert_eq!(engine.select_token(0).unwrap(), Selection::Revealed);
//! // Picking the open token again does nothing
//! assert_eq!(engine.select_token(0).unwrap(), Selection::Ignored);
//! assert_eq!(engine.flip_count(), 1);
//! ```

use tracing::{debug, trace};

use super::outcome::Selection;
use super::{MATCH_REWARD, MISMATCH_PENALTY};
use crate::cards::{PairIdAllocator, Token};
use crate::core::{GameConfig, GameError, GameRng, Result};

/// Context name of the deck-shuffle stream derived from a config seed.
pub const DECK_STREAM: &str = "deck";

/// Single-player Concentration engine.
#[derive(Clone, Debug)]
pub struct GameEngine {
    tokens: Vec<Token>,
    flip_count: u64,
    score: i64,
    rng: GameRng,
}

impl GameEngine {
    /// Deal `pair_count` pairs (ids `1..=pair_count`) and shuffle them.
    ///
    /// Fails with `InvalidArgument` when `pair_count` is zero.
    pub fn new(pair_count: usize, mut rng: GameRng) -> Result<Self> {
        let config = GameConfig::new(pair_count);
        config.validate()?;

        let mut ids = PairIdAllocator::new();
        let mut tokens = Vec::with_capacity(config.token_count());
        for _ in 0..pair_count {
            tokens.extend(Token::pair(&mut ids));
        }
        rng.shuffle(&mut tokens);

        debug!(pair_count, seed = rng.seed(), "deck dealt");

        Ok(Self {
            tokens,
            flip_count: 0,
            score: 0,
            rng,
        })
    }

    /// Build an engine from a config, shuffling with the config's deck stream.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.pair_count,
            GameRng::new(config.seed).for_context(DECK_STREAM),
        )
    }

    // === Observers ===

    /// Tokens in board order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Copy of the token at `index`.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    #[must_use]
    pub fn flip_count(&self) -> u64 {
        self.flip_count
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tokens.len() / 2
    }

    /// Index of the one face-up, unmatched token.
    ///
    /// `None` when no token is open, and also right after a mismatch, when
    /// two tokens are face-up until the next selection.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        let mut open = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_face_up() && !t.is_matched())
            .map(|(i, _)| i);

        match (open.next(), open.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_matched()).count() / 2
    }

    /// All pairs found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tokens.iter().all(Token::is_matched)
    }

    // === Operations ===

    /// Select the token at `index`.
    ///
    /// Matched tokens and the currently open token are ignored without any
    /// state change. Out-of-range indices fail with `IndexOutOfRange` and
    /// leave the engine untouched.
    pub fn select_token(&mut self, index: usize) -> Result<Selection> {
        let token = self
            .tokens
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            })?;

        if token.is_matched() {
            trace!(index, "matched token ignored");
            return Ok(Selection::Ignored);
        }

        let outcome = match self.pending_index() {
            Some(pending) if pending == index => {
                trace!(index, "open token ignored");
                return Ok(Selection::Ignored);
            }
            Some(pending) => {
                let outcome = self.resolve_turn(pending, index);
                self.tokens[index].set_face_up(true);
                outcome
            }
            None => {
                self.collapse_to_single_face_up(index);
                Selection::Revealed
            }
        };

        self.tokens[index].set_seen();
        self.flip_count += 1;

        debug!(
            index,
            outcome = ?outcome,
            score = self.score,
            flip_count = self.flip_count,
            "token selected"
        );

        Ok(outcome)
    }

    /// Clear every flag, zero the counters and reshuffle. Pair ids are kept.
    pub fn reset_game(&mut self) {
        self.flip_count = 0;
        self.score = 0;
        for token in &mut self.tokens {
            token.clear_flags();
        }
        self.rng.shuffle(&mut self.tokens);

        debug!(pair_count = self.pair_count(), "game reset");
    }

    // === Internals ===

    /// Score the second pick of a turn against the pending token.
    fn resolve_turn(&mut self, pending: usize, index: usize) -> Selection {
        if self.tokens[pending].matches(&self.tokens[index]) {
            self.tokens[pending].set_matched();
            self.tokens[index].set_matched();
            self.score += MATCH_REWARD;
            return Selection::Matched {
                pair: self.tokens[index].id(),
            };
        }

        let mut penalty = 0;
        if self.partner_seen_before(pending, index) {
            penalty += MISMATCH_PENALTY;
        }
        if self.tokens[index].is_seen() {
            penalty += MISMATCH_PENALTY;
        }
        self.score -= penalty;

        Selection::Mismatched { penalty }
    }

    /// Was the partner of `pending` already seen somewhere on the board?
    ///
    /// Only looks at indices other than `pending` and `index`. The rule is
    /// asymmetric: the second pick's own partner is never consulted.
    fn partner_seen_before(&self, pending: usize, index: usize) -> bool {
        let target = self.tokens[pending].id();
        self.tokens
            .iter()
            .enumerate()
            .any(|(i, t)| i != pending && i != index && t.is_seen() && t.id() == target)
    }

    /// Turn `index` face-up and every other token face-down.
    fn collapse_to_single_face_up(&mut self, index: usize) {
        for (i, token) in self.tokens.iter_mut().enumerate() {
            token.set_face_up(i == index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PairId;

    fn engine(pair_count: usize) -> GameEngine {
        GameEngine::new(pair_count, GameRng::new(42)).unwrap()
    }

    fn positions(engine: &GameEngine, id: u32) -> (usize, usize) {
        let found: Vec<_> = engine
            .tokens()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.id() == PairId(id))
            .map(|(i, _)| i)
            .collect();
        (found[0], found[1])
    }

    #[test]
    fn test_fresh_engine() {
        let engine = engine(4);
        assert_eq!(engine.tokens().len(), 8);
        assert_eq!(engine.pair_count(), 4);
        assert_eq!(engine.flip_count(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.pending_index(), None);
        assert!(!engine.is_complete());
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let err = GameEngine::new(0, GameRng::new(1)).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument { .. }));
    }

    #[test]
    fn test_oversized_deck_rejected_before_allocating() {
        let err = GameEngine::new(usize::MAX / 2 + 1, GameRng::new(1)).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument { .. }));
    }

    #[test]
    fn test_collapse_leaves_one_face_up() {
        let mut engine = engine(3);
        for token in &mut engine.tokens {
            token.set_face_up(true);
        }

        engine.collapse_to_single_face_up(2);

        let face_up: Vec<_> = (0..6).filter(|&i| engine.tokens[i].is_face_up()).collect();
        assert_eq!(face_up, vec![2]);
    }

    #[test]
    fn test_pending_absent_with_two_open() {
        let mut engine = engine(3);
        let (a, _) = positions(&engine, 1);
        let (b, _) = positions(&engine, 2);

        engine.select_token(a).unwrap();
        assert_eq!(engine.pending_index(), Some(a));

        engine.select_token(b).unwrap();
        assert_eq!(engine.pending_index(), None);
        assert!(engine.tokens[a].is_face_up());
        assert!(engine.tokens[b].is_face_up());
    }

    #[test]
    fn test_partner_seen_excludes_own_indices() {
        let mut engine = engine(2);
        let (a0, a1) = positions(&engine, 1);
        let (b0, _) = positions(&engine, 2);

        engine.tokens[a0].set_seen();
        assert!(!engine.partner_seen_before(a0, b0));

        engine.tokens[a1].set_seen();
        assert!(engine.partner_seen_before(a0, b0));
    }

    #[test]
    fn test_matched_pair_folds_down_next_turn() {
        let mut engine = engine(2);
        let (a0, a1) = positions(&engine, 1);
        let (b0, _) = positions(&engine, 2);

        engine.select_token(a0).unwrap();
        engine.select_token(a1).unwrap();
        assert!(engine.tokens[a0].is_face_up());

        assert_eq!(engine.select_token(b0).unwrap(), Selection::Revealed);
        assert!(!engine.tokens[a0].is_face_up());
        assert!(!engine.tokens[a1].is_face_up());
        assert!(engine.tokens[a0].is_matched());
    }
}
