//! Field tables for the record collections and the translation of request
//! payloads and query strings into store documents.
//!
//! Both directions are strict: keys that are not declared fields of the
//! entity are dropped, and declared fields are coerced to their declared
//! kind or rejected.

use mongodb::bson::{Bson, Document};
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::{FieldError, RecordError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Text }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Integer }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Boolean }
    }
}

/// Check a JSON payload against the field table and build the document to
/// insert. All fields are required. Every offending field is reported.
pub fn validate_payload(
    entity: &'static str,
    fields: &[FieldSpec],
    payload: &Value,
) -> Result<Document, ValidationError> {
    let object = match payload.as_object() {
        Some(object) => object,
        None => {
            return Err(ValidationError {
                entity,
                fields: vec![FieldError::new("body", "expected a JSON object")],
            })
        }
    };

    let mut document = Document::new();
    let mut errors = Vec::new();

    for spec in fields {
        match object.get(spec.name) {
            None | Some(Value::Null) => errors.push(FieldError::new(spec.name, "is required")),
            Some(value) => match json_to_bson(spec.kind, value) {
                Some(bson) => {
                    document.insert(spec.name, bson);
                }
                None => errors.push(FieldError::new(
                    spec.name,
                    format!("expected {}", spec.kind.describe()),
                )),
            },
        }
    }

    if errors.is_empty() {
        Ok(document)
    } else {
        Err(ValidationError { entity, fields: errors })
    }
}

fn json_to_bson(kind: FieldKind, value: &Value) -> Option<Bson> {
    match (kind, value) {
        (FieldKind::Text, Value::String(s)) => Some(Bson::String(s.clone())),
        (FieldKind::Integer, Value::Number(n)) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(Bson::Int32),
        (FieldKind::Boolean, Value::Bool(b)) => Some(Bson::Boolean(*b)),
        _ => None,
    }
}

/// Build an exact-match filter from query parameters. Parameters that do not
/// name a field are ignored; an empty result matches every record.
pub fn build_filter(
    fields: &[FieldSpec],
    params: &HashMap<String, String>,
) -> Result<Document, RecordError> {
    let mut filter = Document::new();

    // Declaration order keeps the filter deterministic regardless of how the
    // query string was ordered.
    for spec in fields {
        if let Some(raw) = params.get(spec.name) {
            filter.insert(spec.name, coerce_param(spec, raw)?);
        }
    }

    for key in params.keys() {
        if !fields.iter().any(|spec| spec.name == key) {
            tracing::warn!("Ignoring unknown filter parameter '{}'", key);
        }
    }

    Ok(filter)
}

fn coerce_param(spec: &FieldSpec, raw: &str) -> Result<Bson, RecordError> {
    let invalid = || RecordError::InvalidParameter {
        name: spec.name.to_string(),
        value: raw.to_string(),
        expected: spec.kind.describe(),
    };

    match spec.kind {
        FieldKind::Text => Ok(Bson::String(raw.to_string())),
        FieldKind::Integer => raw.trim().parse::<i32>().map(Bson::Int32).map_err(|_| invalid()),
        FieldKind::Boolean => parse_boolean(raw).map(Bson::Boolean).ok_or_else(invalid),
    }
}

pub fn parse_boolean(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
