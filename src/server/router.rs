//! Router builder utilities for order routes

use crate::server::handlers::{
    AppState, create_order, delete_order, list_orders, orders_within_business_days, recent_orders,
};
use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde_json::{Value, json};

/// Build order routes
///
/// - GET    /orders                       - List orders that are not deleted
/// - POST   /orders/create                - Create an order
/// - GET    /orders/recent                - Orders from the recent window
/// - GET    /orders/recent-business-days  - Orders within N business days
/// - DELETE /orders/{id}                  - Soft delete an order
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/create", post(create_order))
        .route("/orders/recent", get(recent_orders))
        .route(
            "/orders/recent-business-days",
            get(orders_within_business_days),
        )
        .route("/orders/{id}", delete(delete_order))
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "orders-api"
    }))
}
