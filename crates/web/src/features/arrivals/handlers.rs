use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Local;
use timing::dto::arrivals::{EditArrivalRequest, FinishRecordResponse, RecordArrivalRequest};
use timing::services;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiResult;
use crate::state::SharedState;

#[utoipa::path(
    post,
    path = "/api/arrivals",
    request_body = RecordArrivalRequest,
    responses(
        (status = 200, description = "Arrival recorded", body = FinishRecordResponse),
        (status = 409, description = "Unknown bib, race not started, race finished or duplicate arrival")
    ),
    tag = "arrivals"
)]
pub async fn record_arrival(
    State(shared): State<SharedState>,
    Json(req): Json<RecordArrivalRequest>,
) -> ApiResult<Json<FinishRecordResponse>> {
    req.validate()?;

    let now = Local::now().naive_local();
    let mut state = shared.write().await;
    let record = services::arrivals::record_arrival(&mut state, &req.bib, now)?;
    shared.persist(&state);
    Ok(Json(FinishRecordResponse::from(&record)))
}

#[utoipa::path(
    put,
    path = "/api/races/{race_id}/arrivals/{record_id}",
    params(
        ("race_id" = Uuid, Path, description = "Race id"),
        ("record_id" = Uuid, Path, description = "Finish record id")
    ),
    request_body = EditArrivalRequest,
    responses(
        (status = 200, description = "Arrival updated", body = FinishRecordResponse),
        (status = 400, description = "Invalid time of day"),
        (status = 404, description = "Unknown race or record"),
        (status = 409, description = "Bib conflict or negative elapsed time")
    ),
    tag = "arrivals"
)]
pub async fn edit_arrival(
    State(shared): State<SharedState>,
    Path((race_id, record_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<EditArrivalRequest>,
) -> ApiResult<Json<FinishRecordResponse>> {
    req.validate()?;

    let mut state = shared.write().await;
    let record = services::arrivals::edit_arrival(
        &mut state,
        race_id,
        record_id,
        &req.bib,
        req.arrival_time.as_deref(),
    )?;
    shared.persist(&state);
    Ok(Json(FinishRecordResponse::from(&record)))
}

#[utoipa::path(
    delete,
    path = "/api/races/{race_id}/arrivals/{record_id}",
    params(
        ("race_id" = Uuid, Path, description = "Race id"),
        ("record_id" = Uuid, Path, description = "Finish record id")
    ),
    responses(
        (status = 204, description = "Arrival removed"),
        (status = 404, description = "Unknown race or record")
    ),
    tag = "arrivals"
)]
pub async fn delete_arrival(
    State(shared): State<SharedState>,
    Path((race_id, record_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    let mut state = shared.write().await;
    services::arrivals::delete_arrival(&mut state, race_id, record_id)?;
    shared.persist(&state);
    Ok(StatusCode::NO_CONTENT)
}
