//! Common test utilities for integration tests.
//!
//! Provides a TestContext that builds the full router over a fresh
//! preferences file in the system temp directory.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use flashdeck_backend::config::Config;
use flashdeck_backend::{router, AppState};

/// Test context holding the router and its preferences file.
pub struct TestContext {
    pub preferences_path: PathBuf,
    app: Router,
}

impl TestContext {
    /// Create a context that does not shuffle unless asked to.
    pub fn new() -> Self {
        Self::with_shuffle_default(false)
    }

    pub fn with_shuffle_default(shuffle_by_default: bool) -> Self {
        let preferences_path = std::env::temp_dir()
            .join(format!("flashdeck-test-{}", Uuid::new_v4()))
            .join("preferences.json");

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            preferences_path: preferences_path.clone(),
            shuffle_by_default,
        };

        let app = router(AppState::new(config));

        Self {
            preferences_path,
            app,
        }
    }

    /// Get a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).unwrap()
    }
}

/// Start a session from `text` without shuffling and return its JSON view.
pub async fn start_session(server: &TestServer, text: &str) -> Value {
    let response = server
        .post("/api/sessions")
        .json(&fixtures::create_session_request(text, Some(false)))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// Session URL for a view returned by the API.
pub fn session_url(view: &Value, suffix: &str) -> String {
    let id = view["id"].as_str().unwrap();
    format!("/api/sessions/{}{}", id, suffix)
}
