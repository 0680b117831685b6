//! Core types for the study session.

use serde::{Deserialize, Serialize};

/// A front/back text pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Back content split into its individual lines.
    pub fn back_lines(&self) -> impl Iterator<Item = &str> {
        self.back.split('\n')
    }
}

/// Observable state of a session.
///
/// `Unflipped` and `Flipped` are the two sub-states of studying; `Complete`
/// is terminal until an undo restores a retired card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Unflipped,
    Flipped,
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unflipped => "unflipped",
            Self::Flipped => "flipped",
            Self::Complete => "complete",
        }
    }

    pub fn is_studying(&self) -> bool {
        !matches!(self, Self::Complete)
    }
}

/// User feedback applied to the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    /// Show again three cards later.
    Again,
    /// Move to the end of the deck.
    Hard,
    /// Retire from the deck.
    Easy,
}

impl Judgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Easy => "easy",
        }
    }
}

/// Navigation direction through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Back,
    Forward,
}

/// Per-session judgment counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub completed: u32,
    pub again: u32,
    pub hard: u32,
}

impl SessionCounts {
    pub(crate) fn record(&mut self, judgment: Judgment) {
        match judgment {
            Judgment::Easy => self.completed += 1,
            Judgment::Hard => self.hard += 1,
            Judgment::Again => self.again += 1,
        }
    }

    pub(crate) fn revert(&mut self, judgment: Judgment) {
        let counter = match judgment {
            Judgment::Easy => &mut self.completed,
            Judgment::Hard => &mut self.hard,
            Judgment::Again => &mut self.again,
        };
        *counter = counter.saturating_sub(1);
    }
}
