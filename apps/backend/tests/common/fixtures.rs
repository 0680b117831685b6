//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// Generate deck text with a specified number of cards.
pub fn sample_deck(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("** Question {}?\n// Answer {}.", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn create_session_request(text: &str, shuffle: Option<bool>) -> Value {
    match shuffle {
        Some(shuffle) => json!({ "text": text, "shuffle": shuffle }),
        None => json!({ "text": text }),
    }
}

pub fn judge_request(judgment: &str) -> Value {
    json!({ "judgment": judgment })
}

pub fn navigate_request(direction: &str) -> Value {
    json!({ "direction": direction })
}

pub fn edit_card_request(front: &str, back: &str) -> Value {
    json!({ "front": front, "back": back })
}
