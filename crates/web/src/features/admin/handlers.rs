use axum::{extract::State, http::StatusCode};
use timing::services;

use crate::state::SharedState;

#[utoipa::path(
    delete,
    path = "/api/state",
    responses(
        (status = 204, description = "All races, participants and results cleared")
    ),
    tag = "admin"
)]
pub async fn reset_state(State(shared): State<SharedState>) -> StatusCode {
    let mut state = shared.write().await;
    services::races::reset_all(&mut state);
    shared.persist(&state);
    StatusCode::NO_CONTENT
}
