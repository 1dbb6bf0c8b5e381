use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod seed;

use crate::keys::KeyStore;
use crate::seed::Catalog;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<KeyStore>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(keys: KeyStore, catalog: Catalog) -> Self {
        Self {
            keys: Arc::new(keys),
            catalog: Arc::new(catalog),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Collections ─────────────────────────────────────────────────────
        .route("/users", get(handlers::catalog::list_users))
        .route("/products", get(handlers::catalog::list_products))
        .route("/orders", get(handlers::catalog::list_orders))

        // ── Status ──────────────────────────────────────────────────────────
        .route("/status", get(handlers::status))

        // ── API key gate (matched routes only) ──────────────────────────────
        .route_layer(middleware::from_fn_with_state(
            state.keys.clone(),
            gate::require_api_key,
        ))
        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
