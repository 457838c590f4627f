#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::Document;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use volunteer_registry::{
    config::Config,
    create_app,
    db::{Database, RecordStore},
    errors::StoreError,
    AppState,
};

/// Router plus the state behind it, backed by a fresh in-memory store
#[derive(Clone)]
pub struct TestContext {
    pub app: Router,
    pub state: Arc<AppState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_database(Database::in_memory(), config)
    }

    pub fn with_database(db: Database, config: Config) -> Self {
        let state = Arc::new(AppState { db, config });
        let app = create_app(state.clone());
        Self { app, state }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(payload).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };
        (status, body)
    }
}

pub fn volunteer(name: &str, age: i64, gender: &str, available: bool) -> Value {
    json!({
        "name": name,
        "age": age,
        "email": format!("{}@example.com", name.to_lowercase()),
        "gender": gender,
        "available": available
    })
}

pub fn volunteer_site(name: &str, location: &str, available: bool) -> Value {
    json!({
        "name": name,
        "email": format!("{}@sites.example.com", name.to_lowercase().replace(' ', "")),
        "contact": "912345678",
        "location": location,
        "address": format!("Rua {} 1", name),
        "available": available,
        "task": "Sorting donations"
    })
}

pub fn names(records: &Value) -> Vec<String> {
    let mut names: Vec<String> = records
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

/// Store whose every operation fails as if the server could not be reached
pub struct UnreachableStore;

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn insert_one(&self, _collection: &str, _record: Document) -> Result<Document, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_many(&self, _collection: &str, _filter: Document) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn count_estimated(&self, _collection: &str) -> Result<u64, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

pub fn unreachable_database() -> Database {
    Database::with_store(Arc::new(UnreachableStore))
}
