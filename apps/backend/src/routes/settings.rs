//! Preference endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{PreferencesResponse, UpdatePreferencesRequest};
use crate::AppState;

/// GET /api/settings
pub async fn get_preferences(State(state): State<AppState>) -> Result<Json<PreferencesResponse>> {
    let dark_mode = state.preferences.dark_mode().await?;
    Ok(Json(PreferencesResponse { dark_mode }))
}

/// PUT /api/settings
pub async fn update_preferences(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UpdatePreferencesRequest>,
) -> Result<Json<PreferencesResponse>> {
    let dark_mode = state.preferences.set_dark_mode(request.dark_mode).await?;
    Ok(Json(PreferencesResponse { dark_mode }))
}
