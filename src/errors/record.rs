use axum::http::StatusCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::{AppError, StoreError};
use crate::config::StoreErrorStatus;

/// A single rejected field in a record payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Payload rejected before reaching the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity} validation failed: {}", join_fields(.fields))]
pub struct ValidationError {
    pub entity: &'static str,
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.field == name)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Errors surfaced by the record handlers
#[derive(Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Missing required query parameter '{name}'")]
    MissingParameter { name: &'static str },

    #[error("Invalid value '{value}' for query parameter '{name}': expected {expected}")]
    InvalidParameter { name: String, value: String, expected: &'static str },

    #[error("Malformed request body: {reason}")]
    MalformedBody { reason: String },

    #[error("{source}")]
    Store { source: StoreError, status: StatusCode },
}

impl RecordError {
    /// Wrap a store failure, choosing its status from the configured policy.
    /// Writes the store refused stay client errors.
    pub fn from_store(source: StoreError, policy: StoreErrorStatus) -> Self {
        let status = match source {
            StoreError::Rejected { .. } => StatusCode::BAD_REQUEST,
            _ => policy.status_code(),
        };
        RecordError::Store { source, status }
    }
}

impl AppError for RecordError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecordError::Validation(_)
            | RecordError::MissingParameter { .. }
            | RecordError::InvalidParameter { .. }
            | RecordError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            RecordError::Store { status, .. } => *status,
        }
    }

    fn user_message(&self) -> String {
        self.to_string()
    }

    fn error_code(&self) -> &'static str {
        match self {
            RecordError::Validation(_) => "VALIDATION_ERROR",
            RecordError::MissingParameter { .. } => "MISSING_PARAMETER",
            RecordError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RecordError::MalformedBody { .. } => "MALFORMED_BODY",
            RecordError::Store { source, .. } => match source {
                StoreError::Unavailable { .. } => "STORE_UNAVAILABLE",
                StoreError::Rejected { .. } => "STORE_REJECTED",
                StoreError::Serialization { .. } => "STORE_SERIALIZATION",
                StoreError::Backend { .. } => "STORE_ERROR",
            },
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            RecordError::Validation(e) => serde_json::to_value(&e.fields).ok(),
            _ => None,
        }
    }
}

impl_into_response!(RecordError);
