//! Tokens - the face-down pieces on the board.
//!
//! ## Pair Identity
//!
//! Tokens are created two at a time. Both halves of a pair share one
//! `PairId`, and that id is what "matching" compares. Ids come from an
//! explicit `PairIdAllocator` so deck construction is reproducible.
//!
//! ```
//! use concentration::cards::{PairIdAllocator, Token};
//!
//! let mut ids = PairIdAllocator::new();
//! let [a, b] = Token::pair(&mut ids);
//! let [c, _] = Token::pair(&mut ids);
//!
//! assert!(a.matches(&b));
//! assert!(!a.matches(&c));
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Identifier shared by the two tokens of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Monotonic source of pair ids, starting at 1.
///
/// Advances once per pair, not once per token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairIdAllocator {
    next: u32,
}

impl Default for PairIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl PairIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> PairId {
        let id = PairId(self.next);
        self.next += 1;
        id
    }

    /// How many ids have been handed out.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

/// A single token on the board.
///
/// `Copy`: a token read out of the engine is a snapshot and does not follow
/// later changes to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: PairId,
    face_up: bool,
    matched: bool,
    seen: bool,
}

impl Token {
    /// Create both halves of a new pair.
    pub fn pair(ids: &mut PairIdAllocator) -> [Token; 2] {
        let token = Token::with_id(ids.next_id());
        [token, token]
    }

    /// Create a fresh face-down token with a known id.
    #[must_use]
    pub const fn with_id(id: PairId) -> Self {
        Self {
            id,
            face_up: false,
            matched: false,
            seen: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PairId {
        self.id
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Matched tokens are out of play until the next reset.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Has this token been selected at least once this game?
    #[must_use]
    pub const fn is_seen(&self) -> bool {
        self.seen
    }

    /// Do the two tokens belong to the same pair?
    #[must_use]
    pub fn matches(&self, other: &Token) -> bool {
        self.id == other.id
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
    }

    pub(crate) fn set_seen(&mut self) {
        self.seen = true;
    }

    /// Back to the freshly dealt state. Identity is kept.
    pub(crate) fn clear_flags(&mut self) {
        *self = Token::with_id(self.id);
    }
}
