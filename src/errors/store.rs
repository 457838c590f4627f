use thiserror::Error;

/// Errors raised by a record store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Record rejected by the store: {message}")]
    Rejected { message: String },

    #[error("Failed to convert record: {message}")]
    Serialization { message: String },

    #[error("Record store error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected { message: message.into() }
    }

    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization { message: message.into() }
    }

    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend { message: message.into() }
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        StoreError::serialization(e.to_string())
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(e: mongodb::bson::de::Error) -> Self {
        StoreError::serialization(e.to_string())
    }
}
