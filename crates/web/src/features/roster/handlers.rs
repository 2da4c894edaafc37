use axum::{Json, extract::State};
use timing::dto::roster::ImportSummary;
use timing::models::Participant;
use timing::services;

use crate::error::ApiResult;
use crate::state::SharedState;

#[utoipa::path(
    post,
    path = "/api/roster",
    request_body(content = String, content_type = "text/csv", description = "Roster document, comma- or semicolon-delimited"),
    responses(
        (status = 200, description = "Roster imported, races rebuilt", body = ImportSummary),
        (status = 400, description = "Malformed roster header")
    ),
    tag = "roster"
)]
pub async fn import_roster(
    State(shared): State<SharedState>,
    body: String,
) -> ApiResult<Json<ImportSummary>> {
    let mut state = shared.write().await;
    let summary = services::roster::import_roster(&mut state, &body)?;
    shared.persist(&state);
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "Current roster snapshot", body = Vec<Participant>)
    ),
    tag = "roster"
)]
pub async fn list_participants(State(shared): State<SharedState>) -> Json<Vec<Participant>> {
    let state = shared.read().await;
    Json(state.participants.clone())
}
