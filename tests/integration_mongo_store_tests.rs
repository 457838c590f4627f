//! Record store tests against MongoDB. The container-backed ones need a
//! Docker daemon: `cargo test --test integration_mongo_store_tests -- --ignored`

mod helpers;

use axum::http::StatusCode;
use helpers::{names, volunteer, TestContext};
use mongodb::bson::doc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use volunteer_registry::{
    config::Config,
    db::{Database, MongoStore, RecordStore},
    errors::StoreError,
};

async fn start_mongo() -> (ContainerAsync<Mongo>, Config) {
    let container = Mongo::default().start().await.expect("Failed to start mongo container");
    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get mongo port");

    let config = Config {
        database_url: format!("mongodb://127.0.0.1:{}", port),
        database_name: format!("volunteering_test_{}", std::process::id()),
        ..Config::default()
    };
    (container, config)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_mongo_store_insert_find_count() {
    let (_container, config) = start_mongo().await;
    let store = MongoStore::connect(&config).await.unwrap();
    store.ping().await.unwrap();

    let stored = store
        .insert_one("volunteers", doc! { "name": "Ana", "age": 30, "available": true })
        .await
        .unwrap();
    assert!(stored.get_object_id("_id").is_ok());
    store
        .insert_one("volunteers", doc! { "name": "Bea", "age": 22, "available": false })
        .await
        .unwrap();

    let found = store.find_many("volunteers", doc! { "name": "Ana" }).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0], stored);

    let available = store.find_many("volunteers", doc! { "available": false }).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].get_str("name").unwrap(), "Bea");

    assert_eq!(store.count_estimated("volunteers").await.unwrap(), 2);
    assert_eq!(store.count_estimated("volunteersites").await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_routes_over_mongo_store() {
    let (_container, config) = start_mongo().await;
    let db = Database::new(&config).await.unwrap();
    let ctx = TestContext::with_database(db, config);

    let (status, created) = ctx.post_json("/volunteers", &volunteer("Ana", 30, "F", true)).await;
    assert_eq!(status, StatusCode::OK);
    ctx.post_json("/volunteers", &volunteer("Rui", 44, "M", false)).await;

    let (status, body) = ctx.get("/volunteersByAvailability?available=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Ana"]);
    assert_eq!(body[0]["_id"], created["_id"]);

    let (_, count) = ctx.get("/count_volunteers").await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_unreachable_mongo_is_reported_as_unavailable() {
    let config = Config {
        // Nothing listens on the discard port
        database_url: "mongodb://127.0.0.1:9".to_string(),
        store_timeout: Duration::from_millis(500),
        ..Config::default()
    };
    let store = MongoStore::connect(&config).await.unwrap();

    let err = store.count_estimated("volunteers").await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }), "unexpected error: {:?}", err);
}
