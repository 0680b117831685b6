//! File-backed storage for user preference flags.

use std::path::PathBuf;

use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;

/// Key under which the theme flag is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed preferences file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Preferences kept as a flat JSON object on disk.
///
/// Unknown keys in the file are preserved on write. Reads and writes share
/// one lock so a read never sees a file that is being rewritten.
pub struct PreferenceStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Theme flag; enabled until the user turns it off.
    pub async fn dark_mode(&self) -> Result<bool, PreferenceError> {
        let _guard = self.lock.lock().await;
        let values = self.load().await?;
        Ok(values
            .get(DARK_MODE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(true))
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<bool, PreferenceError> {
        let _guard = self.lock.lock().await;

        let mut values = self.load().await?;
        values.insert(DARK_MODE_KEY.to_string(), Value::Bool(enabled));

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_vec_pretty(&values)?;
        tokio::fs::write(&self.path, content).await?;

        tracing::info!(dark_mode = enabled, path = %self.path.display(), "Saved preferences");
        Ok(enabled)
    }

    async fn load(&self) -> Result<Map<String, Value>, PreferenceError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}
