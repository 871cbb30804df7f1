//! What a single selection did.

use serde::{Deserialize, Serialize};

use crate::cards::PairId;

/// Result of a successful `GameEngine::select_token` call.
///
/// Presentation layers can react to this directly (play a sound, flash the
/// score) instead of diffing engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No-op: the token was already matched or is the one currently open.
    Ignored,
    /// First token of a turn turned face-up.
    Revealed,
    /// Second token completed a pair.
    Matched { pair: PairId },
    /// Second token did not match. `penalty` is 0, 1 or 2.
    Mismatched { penalty: i64 },
}

impl Selection {
    /// Did this selection count as a flip?
    #[must_use]
    pub fn is_flip(&self) -> bool {
        !matches!(self, Selection::Ignored)
    }

    /// Score change caused by this selection.
    #[must_use]
    pub fn score_delta(&self) -> i64 {
        match self {
            Selection::Ignored | Selection::Revealed => 0,
            Selection::Matched { .. } => super::MATCH_REWARD,
            Selection::Mismatched { penalty } => -penalty,
        }
    }
}
