use anyhow::{bail, Context, Result};
use axum::http::StatusCode;
use std::env;
use std::time::Duration;

/// URI that selects the in-process store instead of a MongoDB deployment.
pub const MEMORY_STORE_URI: &str = "memory://";

/// HTTP status reported when the record store itself fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreErrorStatus {
    /// Store failures surface as 400, same as client errors.
    BadRequest,
    /// Store failures surface as 503.
    ServiceUnavailable,
}

impl StoreErrorStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            StoreErrorStatus::BadRequest => StatusCode::BAD_REQUEST,
            StoreErrorStatus::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "400" | "bad_request" => Ok(StoreErrorStatus::BadRequest),
            "503" | "service_unavailable" => Ok(StoreErrorStatus::ServiceUnavailable),
            other => bail!("STORE_ERROR_STATUS must be 400 or 503, got '{}'", other),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub server_address: String,
    pub store_timeout: Duration,
    pub max_pool_size: u32,
    pub store_error_status: StoreErrorStatus,
    pub require_filter_params: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "volunteering".to_string(),
            server_address: "0.0.0.0:8000".to_string(),
            store_timeout: Duration::from_secs(10),
            max_pool_size: 20,
            store_error_status: StoreErrorStatus::BadRequest,
            require_filter_params: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            store_timeout: match env::var("STORE_TIMEOUT_SECONDS") {
                Ok(s) => Duration::from_secs(
                    s.trim()
                        .parse()
                        .with_context(|| format!("STORE_TIMEOUT_SECONDS is not a number: '{}'", s))?,
                ),
                Err(_) => defaults.store_timeout,
            },
            max_pool_size: match env::var("MAX_POOL_SIZE") {
                Ok(s) => s
                    .trim()
                    .parse()
                    .with_context(|| format!("MAX_POOL_SIZE is not a number: '{}'", s))?,
                Err(_) => defaults.max_pool_size,
            },
            store_error_status: match env::var("STORE_ERROR_STATUS") {
                Ok(s) => StoreErrorStatus::parse(&s)?,
                Err(_) => defaults.store_error_status,
            },
            require_filter_params: match env::var("REQUIRE_FILTER_PARAMS") {
                Ok(s) => parse_flag(&s)
                    .with_context(|| format!("REQUIRE_FILTER_PARAMS is not a boolean: '{}'", s))?,
                Err(_) => defaults.require_filter_params,
            },
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_STORE_URI
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_status_parsing() {
        assert_eq!(StoreErrorStatus::parse("400").unwrap(), StoreErrorStatus::BadRequest);
        assert_eq!(StoreErrorStatus::parse(" 503 ").unwrap(), StoreErrorStatus::ServiceUnavailable);
        assert_eq!(
            StoreErrorStatus::parse("SERVICE_UNAVAILABLE").unwrap(),
            StoreErrorStatus::ServiceUnavailable
        );
        assert!(StoreErrorStatus::parse("500").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_memory_store_selection() {
        let mut config = Config::default();
        assert!(!config.uses_memory_store());
        config.database_url = MEMORY_STORE_URI.to_string();
        assert!(config.uses_memory_store());
    }
}
