//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors raised by the parser and the study session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    #[error("no flashcards found in input")]
    EmptyInput,

    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("no current card: session is complete")]
    NoCurrentCard,

    #[error("invalid card: {0}")]
    InvalidCard(&'static str),
}

impl FlashcardError {
    pub(crate) fn invalid(operation: &'static str, state: &'static str) -> Self {
        Self::InvalidState { operation, state }
    }
}
