use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;
use timing::dto::races::{CreateWaveRequest, RaceDetailResponse, RaceResponse, WaveResponse};
use timing::services;
use uuid::Uuid;

use crate::error::{ApiResult, WebError};
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/races",
    responses(
        (status = 200, description = "All races of the current roster", body = Vec<RaceResponse>)
    ),
    tag = "races"
)]
pub async fn list_races(State(shared): State<SharedState>) -> Json<Vec<RaceResponse>> {
    let state = shared.read().await;
    let races = state
        .races
        .iter()
        .map(|race| RaceResponse::new(race, state.selected_race_id))
        .collect();
    Json(races)
}

#[utoipa::path(
    get,
    path = "/api/races/{race_id}",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 200, description = "Race with its waves", body = RaceDetailResponse),
        (status = 404, description = "Unknown race")
    ),
    tag = "races"
)]
pub async fn get_race(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<Json<RaceDetailResponse>> {
    let state = shared.read().await;
    let race = state.race(race_id)?;
    Ok(Json(RaceDetailResponse::from(race)))
}

#[utoipa::path(
    post,
    path = "/api/races/{race_id}/start",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 200, description = "Race (re)started; previous results and waves cleared", body = RaceResponse),
        (status = 404, description = "Unknown race")
    ),
    tag = "races"
)]
pub async fn start_race(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<Json<RaceResponse>> {
    let now = Local::now().naive_local();
    let mut state = shared.write().await;
    services::races::start_race(&mut state, race_id, now)?;
    shared.persist(&state);
    let race = state.race(race_id)?;
    Ok(Json(RaceResponse::new(race, state.selected_race_id)))
}

#[utoipa::path(
    post,
    path = "/api/races/{race_id}/stop",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 200, description = "Race frozen; results kept", body = RaceResponse),
        (status = 404, description = "Unknown race")
    ),
    tag = "races"
)]
pub async fn stop_race(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<Json<RaceResponse>> {
    let mut state = shared.write().await;
    services::races::stop_race(&mut state, race_id)?;
    shared.persist(&state);
    let race = state.race(race_id)?;
    Ok(Json(RaceResponse::new(race, state.selected_race_id)))
}

#[utoipa::path(
    post,
    path = "/api/races/{race_id}/select",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 204, description = "Race selected"),
        (status = 404, description = "Unknown race")
    ),
    tag = "races"
)]
pub async fn select_race(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<axum::http::StatusCode> {
    let mut state = shared.write().await;
    services::races::select_race(&mut state, race_id)?;
    shared.persist(&state);
    Ok(axum::http::StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/races/{race_id}/waves",
    params(("race_id" = Uuid, Path, description = "Race id")),
    request_body = CreateWaveRequest,
    responses(
        (status = 200, description = "Wave appended", body = WaveResponse),
        (status = 400, description = "Invalid gender code or time of day"),
        (status = 404, description = "Unknown race"),
        (status = 409, description = "Race has not started")
    ),
    tag = "races"
)]
pub async fn create_wave(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
    Json(req): Json<CreateWaveRequest>,
) -> ApiResult<Json<WaveResponse>> {
    req.validate().map_err(WebError::BadRequest)?;

    let now = Local::now().naive_local();
    let mut state = shared.write().await;
    let wave = services::races::create_wave(
        &mut state,
        race_id,
        now,
        req.start_time.as_deref(),
        req.categories,
        req.genders,
    )?;
    shared.persist(&state);
    Ok(Json(WaveResponse::from(&wave)))
}
