use mongodb::bson::{self, oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

pub mod schema;
pub mod volunteer;
pub mod volunteer_site;

pub use schema::{FieldKind, FieldSpec};
pub use volunteer::Volunteer;
pub use volunteer_site::VolunteerSite;

use crate::errors::{FieldError, ValidationError};

/// A record type kept in its own collection of the record store.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name used in validation messages and logs
    const NAME: &'static str;
    /// Collection holding the records
    const COLLECTION: &'static str;
    /// Declared fields; all of them are required at creation
    const FIELDS: &'static [FieldSpec];

    /// Validate a request payload and build the record from it
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let document = schema::validate_payload(Self::NAME, Self::FIELDS, payload)?;
        bson::from_document(document).map_err(|e| ValidationError {
            entity: Self::NAME,
            fields: vec![FieldError::new("body", e.to_string())],
        })
    }
}

/// A record as persisted, with its store-assigned key.
/// The key is rendered as a hex string in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<E> {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub record: E,
}
