use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use timing::clock::{format_duration, format_time_of_day};
use timing::codec::results::results_csv;
use timing::dto::ranking::{PodiumEntry, PodiumQuery, RankedResultResponse};
use timing::services::ranking::{compute_podium, sorted_results};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/races/{race_id}/results",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 200, description = "General ranking, ascending elapsed time", body = Vec<RankedResultResponse>),
        (status = 404, description = "Unknown race")
    ),
    tag = "rankings"
)]
pub async fn get_results(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<Json<Vec<RankedResultResponse>>> {
    let state = shared.read().await;
    let race = state.race(race_id)?;

    let ranking = sorted_results(race)
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let team = state
                .participants
                .iter()
                .find(|p| p.bib_number == record.bib_number && p.competition == race.name)
                .map(|p| p.team_full_name.clone());
            RankedResultResponse {
                position: index + 1,
                record_id: record.record_id,
                bib_number: record.bib_number,
                team,
                elapsed_time: format_duration(record.elapsed_seconds),
                arrival_time: format_time_of_day(Some(record.arrival_at)),
            }
        })
        .collect();

    Ok(Json(ranking))
}

#[utoipa::path(
    get,
    path = "/api/races/{race_id}/podium",
    params(
        ("race_id" = Uuid, Path, description = "Race id"),
        PodiumQuery
    ),
    responses(
        (status = 200, description = "Top 3 of the category/gender sub-group", body = Vec<PodiumEntry>),
        (status = 400, description = "Invalid gender code"),
        (status = 404, description = "Unknown race")
    ),
    tag = "rankings"
)]
pub async fn get_podium(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
    Query(query): Query<PodiumQuery>,
) -> ApiResult<Json<Vec<PodiumEntry>>> {
    let state = shared.read().await;
    let race = state.race(race_id)?;
    let podium = compute_podium(race, &state.participants, &query.category, &query.gender)?;
    Ok(Json(podium))
}

#[utoipa::path(
    get,
    path = "/api/races/{race_id}/export",
    params(("race_id" = Uuid, Path, description = "Race id")),
    responses(
        (status = 200, description = "Results as CSV, roster columns joined by bib", content_type = "text/csv"),
        (status = 404, description = "Unknown race")
    ),
    tag = "rankings"
)]
pub async fn export_results(
    State(shared): State<SharedState>,
    Path(race_id): Path<Uuid>,
) -> ApiResult<Response> {
    let state = shared.read().await;
    let race = state.race(race_id)?;
    let csv = results_csv(race, &state.participants);

    let filename = race.name.replace(' ', "_");
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"results_{filename}.csv\""),
        ),
    ];
    Ok((headers, csv).into_response())
}
