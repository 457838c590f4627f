//! Handler bodies shared by every record collection. The per-resource route
//! modules are thin wrappers that pick the entity and the filter key.

use axum::{extract::rejection::JsonRejection, response::Json};
use mongodb::bson::Document;
use serde_json::Value;
use std::collections::HashMap;

use crate::{
    errors::{RecordError, StoreError},
    models::{schema, Entity, Stored},
    AppState,
};

fn store_error(state: &AppState, e: StoreError) -> RecordError {
    RecordError::from_store(e, state.config.store_error_status)
}

pub async fn create_record<E: Entity>(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Stored<E>>, RecordError> {
    let Json(payload) = payload.map_err(|rejection| RecordError::MalformedBody {
        reason: rejection.body_text(),
    })?;

    let record = E::from_payload(&payload)?;
    let stored = state.db.insert(&record).await.map_err(|e| store_error(state, e))?;

    tracing::info!("Created {} {}", E::NAME, stored.id);
    Ok(Json(stored))
}

/// List every record of the collection. Query parameters play no part.
pub async fn list_all_records<E: Entity>(
    state: &AppState,
) -> Result<Json<Vec<Stored<E>>>, RecordError> {
    let records = state.db.find::<E>(Document::new()).await.map_err(|e| store_error(state, e))?;
    Ok(Json(records))
}

/// List records matching the query parameters exactly.
///
/// `key` names the parameter the route is keyed on. When it is absent the
/// request degrades to the remaining parameters (list-all when none are left)
/// unless the configuration asks for it to be rejected. Parameters that name
/// no field of the entity are dropped and do not narrow the result.
pub async fn list_records<E: Entity>(
    state: &AppState,
    params: &HashMap<String, String>,
    key: &'static str,
) -> Result<Json<Vec<Stored<E>>>, RecordError> {
    if !params.contains_key(key) {
        if state.config.require_filter_params {
            return Err(RecordError::MissingParameter { name: key });
        }
        tracing::debug!("{} lookup without '{}', using remaining parameters", E::NAME, key);
    }

    let filter = schema::build_filter(E::FIELDS, params)?;
    tracing::debug!("Finding {} records matching {}", E::NAME, filter);

    let records = state.db.find::<E>(filter).await.map_err(|e| store_error(state, e))?;
    Ok(Json(records))
}

pub async fn count_records<E: Entity>(state: &AppState) -> Result<Json<u64>, RecordError> {
    let count = state.db.count::<E>().await.map_err(|e| store_error(state, e))?;
    Ok(Json(count))
}
