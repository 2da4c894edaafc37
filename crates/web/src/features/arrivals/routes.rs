use axum::{
    Router,
    routing::{post, put},
};

use super::handlers::{delete_arrival, edit_arrival, record_arrival};
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/arrivals", post(record_arrival))
        .route(
            "/races/:race_id/arrivals/:record_id",
            put(edit_arrival).delete(delete_arrival),
        )
}
