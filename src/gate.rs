//! Request Gate: API key check in front of every protected route.
//!
//! The key is read from the `api_key` query parameter or, failing that, the
//! `X-API-Key` header. A repeated parameter resolves to its last value; an
//! empty value counts as absent:
//!
//! ```bash
//! curl "http://127.0.0.1:8000/users?api_key=12345"
//! curl -H "X-API-Key: 12345" http://127.0.0.1:8000/users
//! ```

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::keys::KeyStore;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The validated key, inserted into request extensions for handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

pub const API_KEY_PARAM: &str = "api_key";

fn query_api_key(req: &Request) -> Option<String> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri()).ok()?;
    pairs
        .into_iter()
        .filter(|(name, _)| name == API_KEY_PARAM)
        .map(|(_, value)| value)
        .last()
}

fn extract_api_key(req: &Request) -> Option<String> {
    if let Some(key) = query_api_key(req).filter(|key| !key.is_empty()) {
        return Some(key);
    }

    req.headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

/// Rejects the request with 403 unless it carries a configured key.
pub async fn require_api_key(
    State(keys): State<Arc<KeyStore>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let path = req.uri().path().to_string();

    let key = match extract_api_key(&req) {
        Some(key) if keys.contains(&key) => key,
        Some(_) => {
            warn!(path = %path, "Rejected unknown API key");
            return Err(AppError::Unauthorized);
        }
        None => {
            warn!(path = %path, "Rejected request without API key");
            return Err(AppError::Unauthorized);
        }
    };

    debug!(path = %path, "Request authenticated");
    req.extensions_mut().insert(ApiKey(key));
    Ok(next.run(req).await)
}
