pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;


use axum::{extract::State, routing::get, Json, Router};
use config::Config;
use db::Database;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for monitoring. Reports store reachability without
/// failing the request.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let store = if state.db.check_health().await { "up" } else { "down" };
    Json(serde_json::json!({"status": "ok", "store": store}))
}

/// Assemble the full HTTP surface over the given state
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .merge(routes::volunteers::router())
        .merge(routes::volunteer_sites::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
