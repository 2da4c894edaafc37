use anyhow::Context;
use axum::Router;
use timing::snapshot::SnapshotStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::SharedState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::roster::handlers::import_roster,
        features::roster::handlers::list_participants,
        features::races::handlers::list_races,
        features::races::handlers::get_race,
        features::races::handlers::start_race,
        features::races::handlers::stop_race,
        features::races::handlers::select_race,
        features::races::handlers::create_wave,
        features::arrivals::handlers::record_arrival,
        features::arrivals::handlers::edit_arrival,
        features::arrivals::handlers::delete_arrival,
        features::ranking::handlers::get_results,
        features::ranking::handlers::get_podium,
        features::ranking::handlers::export_results,
        features::admin::handlers::reset_state,
    ),
    components(
        schemas(
            timing::dto::roster::ImportSummary,
            timing::dto::races::CreateWaveRequest,
            timing::dto::races::WaveResponse,
            timing::dto::races::RaceResponse,
            timing::dto::races::RaceDetailResponse,
            timing::dto::arrivals::RecordArrivalRequest,
            timing::dto::arrivals::EditArrivalRequest,
            timing::dto::arrivals::FinishRecordResponse,
            timing::dto::ranking::PodiumEntry,
            timing::dto::ranking::RankedResultResponse,
            timing::models::Participant,
            timing::models::Race,
            timing::models::StartWave,
            timing::models::FinishRecord,
            timing::models::Gender,
        )
    ),
    tags(
        (name = "roster", description = "Roster import and participant listing"),
        (name = "races", description = "Race lifecycle and start waves"),
        (name = "arrivals", description = "Finish-line recording and corrections"),
        (name = "rankings", description = "General ranking, podiums and CSV export"),
        (name = "admin", description = "State administration"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting race timing API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = SnapshotStore::new(&config.snapshot_path);
    let app_state = store.load();
    tracing::info!(
        races = app_state.races.len(),
        participants = app_state.participants.len(),
        "application state hydrated"
    );

    let shared = SharedState::new(app_state, store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", features::routes())
        .layer(cors)
        .with_state(shared);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
