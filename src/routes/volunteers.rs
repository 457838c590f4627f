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
    models::{Stored, Volunteer},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/volunteers", get(list_volunteers).post(create_volunteer))
        .route("/volunteersByName", get(list_volunteers_by_name))
        .route("/volunteersByGender", get(list_volunteers_by_gender))
        .route("/volunteersByAvailability", get(list_volunteers_by_availability))
        .route("/count_volunteers", get(count_volunteers))
}

async fn create_volunteer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Stored<Volunteer>>, RecordError> {
    records::create_record(&state, payload).await
}

async fn list_volunteers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stored<Volunteer>>>, RecordError> {
    records::list_all_records(&state).await
}

async fn list_volunteers_by_name(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<Volunteer>>>, RecordError> {
    records::list_records(&state, &params, "name").await
}

async fn list_volunteers_by_gender(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<Volunteer>>>, RecordError> {
    records::list_records(&state, &params, "gender").await
}

async fn list_volunteers_by_availability(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Stored<Volunteer>>>, RecordError> {
    records::list_records(&state, &params, "available").await
}

async fn count_volunteers(State(state): State<Arc<AppState>>) -> Result<Json<u64>, RecordError> {
    records::count_records::<Volunteer>(&state).await
}
