use axum::{Router, routing::get};

use super::handlers::{export_results, get_podium, get_results};
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/races/:race_id/results", get(get_results))
        .route("/races/:race_id/podium", get(get_podium))
        .route("/races/:race_id/export", get(export_results))
}
