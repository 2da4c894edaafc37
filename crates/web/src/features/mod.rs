pub mod admin;
pub mod arrivals;
pub mod races;
pub mod ranking;
pub mod roster;

use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .merge(roster::routes::routes())
        .merge(races::routes::routes())
        .merge(arrivals::routes::routes())
        .merge(ranking::routes::routes())
        .merge(admin::routes::routes())
}
