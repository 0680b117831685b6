//! Study session endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use flashcard_core::{parse_deck, serialize, Session};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::extract::ApiJson;
use crate::models::*;
use crate::services::sessions::StudyRun;
use crate::AppState;

/// Apply a transition to a session and render the result.
fn transition<F>(state: &AppState, id: Uuid, f: F) -> Result<Json<SessionView>>
where
    F: FnOnce(&mut Session) -> flashcard_core::Result<()>,
{
    let view = state
        .sessions
        .with_run(id, |run| {
            f(&mut run.session)?;
            Ok::<_, ApiError>(SessionView::from_run(id, run))
        })
        .ok_or_else(|| not_found(id))??;

    Ok(Json(view))
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session {} not found", id))
}

/// POST /api/parse
/// Validates authored text without starting a session
pub async fn preview(ApiJson(payload): ApiJson<ParseRequest>) -> Result<Json<ParseResponse>> {
    let cards = parse_deck(&payload.text)?;
    Ok(Json(ParseResponse {
        count: cards.len(),
        cards,
    }))
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionView>)> {
    let shuffle = payload.shuffle.unwrap_or(state.config.shuffle_by_default);
    let run = StudyRun::start(payload.text, shuffle)?;
    let cards = run.session.len();
    let id = state.sessions.insert(run);

    tracing::info!(session = %id, cards, shuffle, "Started study session");

    let view = state
        .sessions
        .with_run(id, |run| SessionView::from_run(id, run))
        .ok_or_else(|| not_found(id))?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/sessions/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    transition(&state, id, |_| Ok(()))
}

/// DELETE /api/sessions/:id
/// Leaves the session and hands the remaining deck back as editor text
pub async fn discard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportResponse>> {
    let run = state.sessions.remove(id).ok_or_else(|| not_found(id))?;

    tracing::info!(session = %id, remaining = run.session.len(), "Discarded study session");

    Ok(Json(ExportResponse {
        text: export_text(&run),
    }))
}

/// GET /api/sessions/:id/export
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportResponse>> {
    let text = state
        .sessions
        .with_run(id, |run| export_text(run))
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ExportResponse { text }))
}

/// Remaining deck, or the original text once everything is retired.
fn export_text(run: &StudyRun) -> String {
    if run.session.is_empty() {
        run.source.clone()
    } else {
        serialize(run.session.cards())
    }
}

/// POST /api/sessions/:id/flip
pub async fn flip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    transition(&state, id, Session::flip)
}

/// POST /api/sessions/:id/judge
pub async fn judge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<JudgeRequest>,
) -> Result<Json<SessionView>> {
    let view = transition(&state, id, |session| session.judge(payload.judgment))?;

    tracing::debug!(session = %id, judgment = payload.judgment.as_str(), "Judged card");
    if view.phase == Phase::Complete {
        tracing::info!(
            session = %id,
            completed = view.counts.completed,
            again = view.counts.again,
            hard = view.counts.hard,
            "Study session complete"
        );
    }

    Ok(view)
}

/// POST /api/sessions/:id/undo
pub async fn undo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    transition(&state, id, |session| {
        if !session.undo() {
            tracing::debug!(session = %id, "Nothing to undo");
        }
        Ok(())
    })
}

/// POST /api/sessions/:id/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<NavigateRequest>,
) -> Result<Json<SessionView>> {
    transition(&state, id, |session| session.navigate(payload.direction))
}

/// POST /api/sessions/:id/edit
pub async fn begin_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    transition(&state, id, Session::begin_edit)
}

/// DELETE /api/sessions/:id/edit
pub async fn cancel_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>> {
    transition(&state, id, |session| {
        session.cancel_edit();
        Ok(())
    })
}

/// PUT /api/sessions/:id/card
pub async fn edit_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(payload): ApiJson<EditCardRequest>,
) -> Result<Json<SessionView>> {
    transition(&state, id, |session| {
        session.edit_card(&payload.front, &payload.back)
    })
}

/// POST /api/sessions/:id/restart
pub async fn restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: std::result::Result<Json<RestartSessionRequest>, JsonRejection>,
) -> Result<Json<SessionView>> {
    // An empty body restarts with the configured default.
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => RestartSessionRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let shuffle = request.shuffle.unwrap_or(state.config.shuffle_by_default);

    let view = state
        .sessions
        .with_run(id, |run| {
            run.restart(shuffle)?;
            Ok::<_, ApiError>(SessionView::from_run(id, run))
        })
        .ok_or_else(|| not_found(id))??;

    tracing::info!(session = %id, shuffle, "Restarted study session");

    Ok(Json(view))
}
