//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from flashcard-core
pub use flashcard_core::{Card, Direction, Judgment, Phase, SessionCounts};

use crate::services::sessions::StudyRun;

// === Parsing ===

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    pub count: usize,
    pub cards: Vec<Card>,
}

// === Sessions ===

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub text: String,
    #[serde(default)]
    pub shuffle: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RestartSessionRequest {
    #[serde(default)]
    pub shuffle: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct JudgeRequest {
    pub judgment: Judgment,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: Direction,
}

#[derive(Debug, Deserialize)]
pub struct EditCardRequest {
    pub front: String,
    pub back: String,
}

/// Serialized deck text, used when leaving a session for the editor.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub text: String,
}

/// What the presentation layer needs to render a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_card: Option<Card>,
    pub current_index: usize,
    /// 1-based position, absent once complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub remaining: usize,
    pub counts: SessionCounts,
    pub can_undo: bool,
    pub editing: bool,
    pub started_at: DateTime<Utc>,
}

impl SessionView {
    pub fn from_run(id: Uuid, run: &StudyRun) -> Self {
        let session = &run.session;
        Self {
            id,
            phase: session.phase(),
            current_card: session.current_card().ok().cloned(),
            current_index: session.current_index(),
            position: session.progress().map(|(position, _)| position),
            remaining: session.len(),
            counts: session.counts(),
            can_undo: session.can_undo(),
            editing: session.is_editing(),
            started_at: run.started_at,
        }
    }
}

// === Preferences ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PreferencesResponse {
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub dark_mode: bool,
}
