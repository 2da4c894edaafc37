use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{import_roster, list_participants};
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/roster", post(import_roster))
        .route("/participants", get(list_participants))
}
