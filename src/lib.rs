use axum::{extract::FromRef, routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod aggregate;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub season_id: i64,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Tournament API - v1.0" }))
        .route("/ping", get(routes::health::ping))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/api/teams", get(routes::teams::get_teams).post(routes::teams::create_team))
        .route("/api/teams/{id}/members", get(routes::teams::get_team_members))

        // Participant endpoints
        .route(
            "/api/participants",
            get(routes::participants::get_participants).post(routes::participants::create_participant),
        )

        // Match endpoints
        .route("/api/matches", get(routes::matches::get_matches))

        .fallback(|| async { error::ApiError::NotFound })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
