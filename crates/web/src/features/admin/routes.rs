use axum::{Router, routing::delete};

use super::handlers::reset_state;
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new().route("/state", delete(reset_state))
}
