use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Body detail returned for every rejected key.
pub const INVALID_API_KEY: &str = "Invalid API Key";

/// Request-time errors. Each variant maps to a fixed `{"detail": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", INVALID_API_KEY)]
    Unauthorized,

    #[error("Not Found")]
    NotFound,
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthorized => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Startup-fatal errors raised while loading the key configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read key configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key configuration is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("key configuration has no [{0}] section")]
    MissingSection(&'static str),

    #[error("[{0}] must be a table of name = \"value\" entries")]
    NotATable(&'static str),

    #[error("api key `{0}` must be a string")]
    NonStringValue(String),

    #[error("[{0}] does not define any keys")]
    NoKeys(&'static str),
}
