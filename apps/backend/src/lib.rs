pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::preferences::PreferenceStore;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
    pub preferences: Arc<PreferenceStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let preferences = PreferenceStore::new(config.preferences_path.clone());
        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            preferences: Arc::new(preferences),
        }
    }
}

/// Build the full router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/parse", post(routes::sessions::preview))
        // Session routes
        .route("/api/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/:id",
            get(routes::sessions::show).delete(routes::sessions::discard),
        )
        .route("/api/sessions/:id/export", get(routes::sessions::export))
        .route("/api/sessions/:id/flip", post(routes::sessions::flip))
        .route("/api/sessions/:id/judge", post(routes::sessions::judge))
        .route("/api/sessions/:id/undo", post(routes::sessions::undo))
        .route("/api/sessions/:id/navigate", post(routes::sessions::navigate))
        .route(
            "/api/sessions/:id/edit",
            post(routes::sessions::begin_edit).delete(routes::sessions::cancel_edit),
        )
        .route("/api/sessions/:id/card", put(routes::sessions::edit_card))
        .route("/api/sessions/:id/restart", post(routes::sessions::restart))
        // Settings routes
        .route(
            "/api/settings",
            get(routes::settings::get_preferences).put(routes::settings::update_preferences),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();

    tracing::info!(
        path = %config.preferences_path.display(),
        shuffle_by_default = config.shuffle_by_default,
        "Loaded configuration"
    );

    let app = router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
