//! Study session state machine.
//!
//! A [`Session`] owns the working deck, the current position, the flip
//! sub-state, the judgment counters and the undo history. Every transition
//! is applied in full before it returns, or rejected before touching state.
//!
//! Reordering rules:
//! - easy: the card is retired from the deck.
//! - hard: the card moves to the end of the deck.
//! - again: the card is reinserted [`AGAIN_OFFSET`] places later, or at the
//!   end when the deck is shorter than that.
//!
//! Card edits are not recorded in the undo history; only judgments are.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{FlashcardError, Result};
use crate::types::{Card, Direction, Judgment, Phase, SessionCounts};

/// How many places later a card judged "again" comes back.
pub const AGAIN_OFFSET: usize = 3;

/// Shuffle cards in place with an unbiased Fisher-Yates permutation.
pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// One recorded judgment, enough to reverse it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    judgment: Judgment,
    card: Card,
    position_before: usize,
    /// Where the card landed; only meaningful for `Again`.
    position_after: usize,
    was_flipped: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: Vec<Card>,
    current_index: usize,
    phase: Phase,
    counts: SessionCounts,
    history: Vec<HistoryEntry>,
    editing: bool,
}

impl Session {
    /// Start a session, shuffling with the thread-local RNG when asked.
    pub fn new(cards: Vec<Card>, shuffle: bool) -> Self {
        Self::with_rng(cards, shuffle, &mut rand::thread_rng())
    }

    /// Start a session using the given RNG for the optional shuffle.
    pub fn with_rng<R: Rng + ?Sized>(mut cards: Vec<Card>, shuffle: bool, rng: &mut R) -> Self {
        if shuffle {
            shuffle_cards(&mut cards, rng);
        }

        let phase = if cards.is_empty() {
            Phase::Complete
        } else {
            Phase::Unflipped
        };

        Self {
            deck: cards,
            current_index: 0,
            phase,
            counts: SessionCounts::default(),
            history: Vec::new(),
            editing: false,
        }
    }

    // === Queries ===

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        !self.phase.is_studying()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    pub fn counts(&self) -> SessionCounts {
        self.counts
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// 1-based position and deck size, or `None` once complete.
    pub fn progress(&self) -> Option<(usize, usize)> {
        if self.is_complete() {
            return None;
        }
        Some((self.current_index + 1, self.deck.len()))
    }

    pub fn current_card(&self) -> Result<&Card> {
        if self.is_complete() {
            return Err(FlashcardError::NoCurrentCard);
        }
        self.deck
            .get(self.current_index)
            .ok_or(FlashcardError::NoCurrentCard)
    }

    // === Transitions ===

    /// Reveal the back of the current card. Flipping an already flipped card
    /// does nothing.
    pub fn flip(&mut self) -> Result<()> {
        self.ensure_studying("flip")?;
        if self.editing {
            return Err(FlashcardError::invalid("flip", "editing"));
        }
        self.phase = Phase::Flipped;
        Ok(())
    }

    pub fn judge(&mut self, judgment: Judgment) -> Result<()> {
        match judgment {
            Judgment::Easy => self.judge_easy(),
            Judgment::Hard => self.judge_hard(),
            Judgment::Again => self.judge_again(),
        }
    }

    /// Retire the current card.
    pub fn judge_easy(&mut self) -> Result<()> {
        self.ensure_studying("judge")?;
        let position = self.current_index;
        let card = self.deck.remove(position);
        self.record(Judgment::Easy, card, position, position);
        self.settle();
        Ok(())
    }

    /// Send the current card to the end of the deck.
    pub fn judge_hard(&mut self) -> Result<()> {
        self.ensure_studying("judge")?;
        let position = self.current_index;
        let card = self.deck.remove(position);
        self.deck.push(card.clone());
        let landed = self.deck.len() - 1;
        self.record(Judgment::Hard, card, position, landed);
        self.settle();
        Ok(())
    }

    /// Show the current card again a few cards later.
    pub fn judge_again(&mut self) -> Result<()> {
        self.ensure_studying("judge")?;
        let position = self.current_index;
        let card = self.deck.remove(position);
        let landed = (position + AGAIN_OFFSET).min(self.deck.len());
        self.deck.insert(landed, card.clone());
        self.record(Judgment::Again, card, position, landed);
        self.settle();
        Ok(())
    }

    /// Reverse the most recent judgment. Returns `false` when there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };

        match entry.judgment {
            Judgment::Easy => {}
            Judgment::Hard | Judgment::Again => {
                self.deck.remove(entry.position_after);
            }
        }
        self.deck.insert(entry.position_before, entry.card);

        self.counts.revert(entry.judgment);
        self.current_index = entry.position_before;
        self.editing = false;
        self.phase = if entry.was_flipped {
            Phase::Flipped
        } else {
            Phase::Unflipped
        };
        true
    }

    /// Move one card back or forward, wrapping at either end.
    pub fn navigate(&mut self, direction: Direction) -> Result<()> {
        self.ensure_studying("navigate")?;
        if self.editing {
            return Err(FlashcardError::invalid("navigate", "editing"));
        }
        if self.phase == Phase::Flipped {
            return Err(FlashcardError::invalid("navigate", "flipped"));
        }

        let len = self.deck.len();
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % len,
            Direction::Back => (self.current_index + len - 1) % len,
        };
        Ok(())
    }

    /// Mark an inline edit of the current card as in progress.
    pub fn begin_edit(&mut self) -> Result<()> {
        self.ensure_studying("edit")?;
        self.editing = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    /// Overwrite the current card's text. Not recorded for undo.
    ///
    /// The front must be a single non-empty line; back lines are trimmed
    /// individually so the card reads back identically from serialized text.
    pub fn edit_card(&mut self, front: &str, back: &str) -> Result<()> {
        self.ensure_studying("edit")?;

        let front = front.trim();
        if front.is_empty() {
            return Err(FlashcardError::InvalidCard("front must not be empty"));
        }
        if front.contains(['\n', '\r']) {
            return Err(FlashcardError::InvalidCard("front must be a single line"));
        }
        let back = back.trim().lines().map(str::trim).collect::<Vec<_>>().join("\n");

        let card = self
            .deck
            .get_mut(self.current_index)
            .ok_or(FlashcardError::NoCurrentCard)?;
        card.front = front.to_string();
        card.back = back;
        self.editing = false;
        Ok(())
    }

    fn ensure_studying(&self, operation: &'static str) -> Result<()> {
        if self.is_complete() {
            return Err(FlashcardError::invalid(operation, Phase::Complete.as_str()));
        }
        Ok(())
    }

    fn record(&mut self, judgment: Judgment, card: Card, position_before: usize, position_after: usize) {
        self.counts.record(judgment);
        self.history.push(HistoryEntry {
            judgment,
            card,
            position_before,
            position_after,
            was_flipped: self.phase == Phase::Flipped,
        });
    }

    /// Clamp the position and return to the unflipped (or complete) state.
    fn settle(&mut self) {
        if self.current_index >= self.deck.len() {
            self.current_index = 0;
        }
        self.editing = false;
        self.phase = if self.deck.is_empty() {
            Phase::Complete
        } else {
            Phase::Unflipped
        };
    }
}
