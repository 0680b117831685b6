//! Core flashcard library shared by the study backend.
//!
//! Provides:
//! - Parser and serializer for the `**` / `//` flashcard text format
//! - Study session state machine with again/hard/easy reordering and undo
//! - Shared types (Card, Phase, Judgment, etc.)

pub mod error;
pub mod parser;
pub mod session;
pub mod types;

pub use error::{FlashcardError, Result};
pub use parser::{parse, parse_deck, serialize};
pub use session::{shuffle_cards, Session, AGAIN_OFFSET};
pub use types::{Card, Direction, Judgment, Phase, SessionCounts};
