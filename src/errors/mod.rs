use axum::http::StatusCode;

/// Common trait for all custom error types in the application
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get the error code for client-side handling
    fn error_code(&self) -> &'static str;

    /// Optional structured detail attached to the response body
    fn details(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Macro to implement IntoResponse for AppError types.
/// Every error body carries `msg`, `code` and `status`.
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                use crate::errors::AppError;
                use axum::response::Json;
                use serde_json::json;

                let status = self.status_code();
                if status.is_server_error() {
                    tracing::error!(code = self.error_code(), "Request failed: {}", self);
                } else {
                    tracing::warn!(code = self.error_code(), "Request rejected: {}", self);
                }

                let mut body = json!({
                    "msg": self.user_message(),
                    "code": self.error_code(),
                    "status": status.as_u16()
                });
                if let Some(details) = self.details() {
                    body["fields"] = details;
                }

                (status, Json(body)).into_response()
            }
        }
    };
}

pub(crate) use impl_into_response;

pub mod record;
pub mod store;

pub use record::{FieldError, RecordError, ValidationError};
pub use store::StoreError;
