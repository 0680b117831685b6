//! In-memory registry of active study runs.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use flashcard_core::{parse_deck, Session};
use uuid::Uuid;

/// A study session together with the text it was started from.
pub struct StudyRun {
    pub session: Session,
    pub source: String,
    pub started_at: DateTime<Utc>,
}

impl StudyRun {
    /// Parse `source` and start a session over its cards.
    pub fn start(source: String, shuffle: bool) -> flashcard_core::Result<Self> {
        let cards = parse_deck(&source)?;
        Ok(Self {
            session: Session::new(cards, shuffle),
            source,
            started_at: Utc::now(),
        })
    }

    /// Throw away progress and study the source text again.
    pub fn restart(&mut self, shuffle: bool) -> flashcard_core::Result<()> {
        let cards = parse_deck(&self.source)?;
        self.session = Session::new(cards, shuffle);
        self.started_at = Utc::now();
        Ok(())
    }
}

/// Study runs keyed by id. Each access holds the lock for the whole
/// closure, so a transition is never interleaved with another request.
#[derive(Default)]
pub struct SessionStore {
    runs: Mutex<HashMap<Uuid, StudyRun>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, run: StudyRun) -> Uuid {
        let id = Uuid::new_v4();
        self.runs.lock().expect("session store lock").insert(id, run);
        id
    }

    /// Run `f` against the study run, or return `None` for an unknown id.
    pub fn with_run<T>(&self, id: Uuid, f: impl FnOnce(&mut StudyRun) -> T) -> Option<T> {
        let mut runs = self.runs.lock().expect("session store lock");
        runs.get_mut(&id).map(f)
    }

    pub fn remove(&self, id: Uuid) -> Option<StudyRun> {
        self.runs.lock().expect("session store lock").remove(&id)
    }

    pub fn len(&self) -> usize {
        self.runs.lock().expect("session store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::FlashcardError;

    #[test]
    fn start_rejects_text_without_cards() {
        let result = StudyRun::start("## nothing here".to_string(), false);
        assert!(matches!(result, Err(FlashcardError::EmptyInput)));
    }

    #[test]
    fn restart_resets_progress() {
        let mut run = StudyRun::start("** Q1\n// A1\n** Q2\n// A2".to_string(), false).unwrap();
        run.session.judge_easy().unwrap();
        assert_eq!(run.session.len(), 1);

        run.restart(false).unwrap();
        assert_eq!(run.session.len(), 2);
        assert_eq!(run.session.counts().completed, 0);
        assert!(!run.session.can_undo());
    }

    #[test]
    fn store_round_trip() {
        let store = SessionStore::new();
        let run = StudyRun::start("** Q\n// A".to_string(), false).unwrap();
        let id = store.insert(run);

        assert_eq!(store.len(), 1);
        assert_eq!(store.with_run(id, |run| run.session.len()), Some(1));
        assert_eq!(store.with_run(Uuid::new_v4(), |run| run.session.len()), None);

        assert!(store.remove(id).is_some());
        assert!(store.is_empty());
    }
}
