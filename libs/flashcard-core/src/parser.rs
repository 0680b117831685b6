//! Parser for authored flashcard text.
//!
//! # Format
//! ```text
//! ## comments start with two hashes
//! ** What is 2+2?
//! // 4
//!
//! ** Capital of France?
//! // Paris
//! // (also known as the City of Light)
//! ```
//!
//! A `**` line opens a card, `//` lines add to its back. Any other non-empty
//! line while a card is open is also added to the back, so multi-line answers
//! can be written without repeating the marker.

use crate::error::{FlashcardError, Result};
use crate::types::Card;

const COMMENT_MARKER: &str = "##";
const FRONT_MARKER: &str = "**";
const BACK_MARKER: &str = "//";

/// Parse authored text into cards, in input order.
///
/// Fronts without any back line are dropped. Returns an empty vector when
/// nothing valid is found; use [`parse_deck`] to treat that as an error.
pub fn parse(content: &str) -> Vec<Card> {
    let mut parser = Parser::new();

    for line in content.lines() {
        parser.process_line(line);
    }

    parser.finalize()
}

/// Parse authored text, rejecting input that yields no cards.
pub fn parse_deck(content: &str) -> Result<Vec<Card>> {
    let cards = parse(content);
    if cards.is_empty() {
        return Err(FlashcardError::EmptyInput);
    }
    Ok(cards)
}

/// Render cards back into the authored format.
///
/// `parse(&serialize(&cards)) == cards` holds for any deck produced by
/// [`parse`].
pub fn serialize(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let mut block = format!("{} {}", FRONT_MARKER, card.front);
            for line in card.back_lines() {
                block.push('\n');
                block.push_str(BACK_MARKER);
                if !line.is_empty() {
                    block.push(' ');
                    block.push_str(line);
                }
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

struct CardBuilder {
    front: String,
    back: Vec<String>,
}

impl CardBuilder {
    fn new(front: &str) -> Self {
        Self {
            front: front.to_string(),
            back: Vec::new(),
        }
    }

    fn build(self) -> Option<Card> {
        if self.front.is_empty() || self.back.is_empty() {
            return None;
        }
        Some(Card {
            front: self.front,
            back: self.back.join("\n"),
        })
    }
}

struct Parser {
    current: Option<CardBuilder>,
    cards: Vec<Card>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            cards: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match Self::parse_line(line) {
            LineType::Front(text) => self.handle_front(text),
            LineType::Back(text) | LineType::Text(text) => self.handle_back(text),
            LineType::Comment | LineType::Empty => {}
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineType::Empty
        } else if trimmed.starts_with(COMMENT_MARKER) {
            LineType::Comment
        } else if let Some(rest) = trimmed.strip_prefix(FRONT_MARKER) {
            LineType::Front(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix(BACK_MARKER) {
            LineType::Back(rest.trim())
        } else {
            LineType::Text(trimmed)
        }
    }

    fn handle_front(&mut self, text: &str) {
        self.flush();
        self.current = Some(CardBuilder::new(text));
    }

    fn handle_back(&mut self, text: &str) {
        // Back content before the first front has nowhere to go.
        if let Some(ref mut card) = self.current {
            card.back.push(text.to_string());
        }
    }

    fn flush(&mut self) {
        if let Some(card) = self.current.take().and_then(CardBuilder::build) {
            self.cards.push(card);
        }
    }

    fn finalize(mut self) -> Vec<Card> {
        self.flush();
        self.cards
    }
}

enum LineType<'a> {
    Front(&'a str),
    Back(&'a str),
    Text(&'a str),
    Comment,
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_two_cards() {
        let cards = parse("** Q1\n// A1\n\n** Q2\n// A2");
        assert_eq!(cards, vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]);
    }

    #[test]
    fn parse_multiline_back_with_markers() {
        let input = "** What is 2+2?\n// 4\n\n** Capital of France?\n// Paris\n// (also known as the City of Light)";
        let cards = parse(input);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].back, "Paris\n(also known as the City of Light)");
    }

    #[test]
    fn parse_unmarked_lines_extend_back() {
        let cards = parse("** Explain\n// Line 1\n   Line 2   \nLine 3");
        assert_eq!(cards[0].back, "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn unmarked_line_alone_counts_as_back() {
        let cards = parse("** Question\nanswer without marker");
        assert_eq!(cards, vec![Card::new("Question", "answer without marker")]);
    }

    #[test]
    fn comments_are_skipped() {
        let cards = parse("## deck header\n** Q\n## inline note\n// A");
        assert_eq!(cards, vec![Card::new("Q", "A")]);
    }

    #[test]
    fn front_without_back_is_dropped() {
        let cards = parse("** Orphan\n\n** Q\n// A\n** Trailing");
        assert_eq!(cards, vec![Card::new("Q", "A")]);
    }

    #[test]
    fn empty_front_is_dropped() {
        let cards = parse("**\n// nobody asked\n** Q\n// A");
        assert_eq!(cards, vec![Card::new("Q", "A")]);
    }

    #[test]
    fn back_before_any_front_is_ignored() {
        let cards = parse("// stray\nloose text\n** Q\n// A");
        assert_eq!(cards, vec![Card::new("Q", "A")]);
    }

    #[test]
    fn markers_trimmed_and_indented_lines_recognised() {
        let cards = parse("   **   Spaced   \n\t//   out  ");
        assert_eq!(cards, vec![Card::new("Spaced", "out")]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn parse_deck_rejects_empty_input() {
        assert_eq!(parse_deck("## only a comment"), Err(FlashcardError::EmptyInput));
        assert_eq!(parse_deck("** no answer"), Err(FlashcardError::EmptyInput));
    }

    #[test]
    fn parse_deck_returns_cards() {
        let cards = parse_deck("** Q\n// A").unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn serialize_renders_markers() {
        let cards = vec![Card::new("Q1", "A1"), Card::new("Q2", "line one\nline two")];
        assert_eq!(
            serialize(&cards),
            "** Q1\n// A1\n\n** Q2\n// line one\n// line two"
        );
    }

    #[test]
    fn serialize_round_trips_empty_back_line() {
        let cards = parse("** Q\n// first\n//\n// third");
        assert_eq!(cards[0].back, "first\n\nthird");
        assert_eq!(parse(&serialize(&cards)), cards);
    }

    #[test]
    fn serialize_empty_deck() {
        assert_eq!(serialize(&[]), "");
    }
}
