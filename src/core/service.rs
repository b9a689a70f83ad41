//! Service trait for order storage

use crate::core::order::Order;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Store operations for orders
///
/// Implementations decide how orders are persisted. Soft-deleted orders are
/// hidden from every listing but stay reachable through [`get_by_id`].
///
/// [`get_by_id`]: OrderService::get_by_id
#[async_trait]
pub trait OrderService: Send + Sync {
    /// All orders that are not soft-deleted
    async fn get_all(&self) -> Result<Vec<Order>>;

    /// Non-deleted orders entered within the recent window, newest first
    async fn get_recent(&self) -> Result<Vec<Order>>;

    /// Direct lookup, including soft-deleted orders
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Order>>;

    /// Non-deleted orders with `start <= entry_date <= end`, newest first
    async fn get_within_range(&self, start: DateTime<Utc>, end: DateTime<Utc>)
    -> Result<Vec<Order>>;

    /// Persist a new order. The store stamps `entry_date` with the current time.
    async fn create(&self, order: Order) -> Result<Order>;

    /// Replace the stored order with the same id
    ///
    /// Fails when no order with that id exists.
    async fn update(&self, order: Order) -> Result<Order>;
}
