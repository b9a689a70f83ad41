//! Order HTTP handlers
//!
//! Every handler wraps its store calls so that any failure becomes a logged
//! 500 with the fixed `Internal server error` body.

use crate::core::validation::{CreateOrderRequest, OptionalJson};
use crate::core::{
    ApiError, ApiResult, DateRange, Entity, Order, OrderService, ValidationError,
};
use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Order-specific AppState
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderService>,
}

impl AppState {
    pub fn new(orders: Arc<dyn OrderService>) -> Self {
        Self { orders }
    }
}

/// Query string of `GET /orders/recent-business-days`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BusinessDaysQuery {
    /// Absent means 0; negative values behave like 0
    #[serde(rename = "numberOfDays", default)]
    pub number_of_days: i32,
}

/// Path a created order's `Location` header points at
pub fn recent_orders_location(id: Uuid) -> String {
    format!("/{}/recent?id={}", Order::resource_name(), id)
}

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state
        .orders
        .get_all()
        .await
        .map_err(|e| ApiError::internal("fetching orders", e))?;

    Ok(Json(orders))
}

/// POST /orders/create
pub async fn create_order(
    State(state): State<AppState>,
    OptionalJson(request): OptionalJson<CreateOrderRequest>,
) -> ApiResult<impl IntoResponse> {
    let request = request.ok_or(ValidationError::NullRequest)?;
    let order = request.into_order()?;

    let created = state
        .orders
        .create(order)
        .await
        .map_err(|e| ApiError::internal("creating the order", e))?;

    tracing::info!(order_id = %created.id, "order created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, recent_orders_location(created.id))],
        Json(created),
    ))
}

/// GET /orders/recent
pub async fn recent_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state
        .orders
        .get_recent()
        .await
        .map_err(|e| ApiError::internal("fetching recent orders", e))?;

    Ok(Json(orders))
}

/// GET /orders/recent-business-days?numberOfDays=N
pub async fn orders_within_business_days(
    State(state): State<AppState>,
    Query(query): Query<BusinessDaysQuery>,
) -> ApiResult<Json<Vec<Order>>> {
    let number_of_days = u32::try_from(query.number_of_days).unwrap_or(0);
    let range =
        DateRange::business_days(Utc::now().date_naive(), number_of_days).ok_or_else(|| {
            ApiError::internal(
                "retrieving orders within business days",
                anyhow!("{number_of_days} business days back is before the earliest supported date"),
            )
        })?;

    tracing::debug!(number_of_days, start = %range.start, end = %range.end, "business-day range");

    let orders = state
        .orders
        .get_within_range(range.start, range.end)
        .await
        .map_err(|e| ApiError::internal("retrieving orders within business days", e))?;

    Ok(Json(orders))
}

/// DELETE /orders/{id}
///
/// Soft delete: the order is flagged and kept.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let mut order = state
        .orders
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::internal("deleting the order", e))?
        .ok_or(ApiError::NotFound {
            entity_type: Order::resource_name_singular(),
            id,
        })?;

    order.soft_delete();

    state
        .orders
        .update(order)
        .await
        .map_err(|e| ApiError::internal("deleting the order", e))?;

    tracing::info!(order_id = %id, "order soft-deleted");

    Ok(StatusCode::NO_CONTENT)
}
