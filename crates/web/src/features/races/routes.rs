use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_wave, get_race, list_races, select_race, start_race, stop_race};
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/races", get(list_races))
        .route("/races/:race_id", get(get_race))
        .route("/races/:race_id/start", post(start_race))
        .route("/races/:race_id/stop", post(stop_race))
        .route("/races/:race_id/select", post(select_race))
        .route("/races/:race_id/waves", post(create_wave))
}
