use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{exports, health, imports};
use crate::api::state::AppState;

/// Builds the application router over the given repositories
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Imports
        .route("/api/imports/coaches", post(imports::import_coaches))
        .route("/api/imports/teams", post(imports::import_teams))
        // Exports
        .route("/api/exports/coaches", get(exports::export_coaches))
        .route("/api/exports/teams", get(exports::export_teams))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
