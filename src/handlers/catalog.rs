use axum::{extract::State, Json};
use tracing::debug;

use crate::{
    models::{Order, Product, User},
    AppState,
};

// ── Users ─────────────────────────────────────────────────────────────────────

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    debug!(count = state.catalog.users.len(), "Listed users");
    Json(state.catalog.users.clone())
}

// ── Products ──────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    debug!(count = state.catalog.products.len(), "Listed products");
    Json(state.catalog.products.clone())
}

// ── Orders ────────────────────────────────────────────────────────────────────

pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    debug!(count = state.catalog.orders.len(), "Listed orders");
    Json(state.catalog.orders.clone())
}
