//! Engine error type.
//!
//! Both variants are caller precondition violations. Operations that
//! return them leave the engine untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Construction or configuration with an unusable value.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Token index outside the deck.
    #[error("token index {index} out of range for deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::IndexOutOfRange { index: 12, len: 12 };
        assert_eq!(err.to_string(), "token index 12 out of range for deck of 12");

        let err = GameError::invalid("pair count must be at least 1");
        assert_eq!(err.to_string(), "invalid argument: pair count must be at least 1");
    }
}
