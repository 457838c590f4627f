use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::records;
use crate::{
    errors::RecordError,
    models::{Stored, VolunteerSite},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/volunteersites", get(list_sites).post(create_site))
        .route("/volunteersitesByName", get(list_sites_by_name))
        .route("/volunteersitesByLocation", get(list_sites_by_location))
        .route("/volunteersitesByAvailability", get(list_sites_by_availability))
        .route("/count_volunteersites", get(count_sites))
}

async fn create_site(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Stored<VolunteerSite>>, RecordError> {
    records::create_record(&state, payload).await
}

async fn list_sites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stored<VolunteerSite>>>, RecordError> {
    records::list_all_records(&state).await
}

async fn list_sites_by_name(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<VolunteerSite>>>, RecordError> {
    records::list_records(&state, &params, "name").await
}

async fn list_sites_by_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<VolunteerSite>>>, RecordError> {
    records::list_records(&state, &params, "location").await
}

async fn list_sites_by_availability(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<VolunteerSite>>>, RecordError> {
    records::list_records(&state, &params, "available").await
}

async fn count_sites(State(state): State<Arc<AppState>>) -> Result<Json<u64>, RecordError> {
    records::count_records::<VolunteerSite>(&state).await
}
