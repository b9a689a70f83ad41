//! In-memory implementation of OrderService for testing and development

use crate::core::{Entity, Order, OrderService, StorageError};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Default width of the "recent orders" window
pub const DEFAULT_RECENT_WINDOW_HOURS: i64 = 24;

/// In-memory order service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Orders keep their insertion order; clones share the same collection.
#[derive(Clone)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<IndexMap<Uuid, Order>>>,
    recent_window: Duration,
}

impl InMemoryOrderService {
    /// Create an empty store with a 24 hour recent window
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(IndexMap::new())),
            recent_window: Duration::hours(DEFAULT_RECENT_WINDOW_HOURS),
        }
    }

    /// Change how far back `get_recent` looks
    pub fn with_recent_window(mut self, window: Duration) -> Self {
        self.recent_window = window;
        self
    }

    /// Store an order exactly as given, keeping its `entry_date`
    ///
    /// Replaces any order with the same id. Meant for seeding historical data.
    pub fn import(&self, order: Order) -> Result<()> {
        self.write()?.insert(order.id, order);
        Ok(())
    }

    /// Number of stored orders, soft-deleted ones included
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<Uuid, Order>>, StorageError> {
        self.orders.read().map_err(|e| StorageError::LockPoisoned {
            operation: "read",
            message: e.to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<Uuid, Order>>, StorageError> {
        self.orders.write().map_err(|e| StorageError::LockPoisoned {
            operation: "write",
            message: e.to_string(),
        })
    }

    /// Active orders matching `predicate`, newest first
    fn active_newest_first(&self, predicate: impl Fn(&Order) -> bool) -> Result<Vec<Order>> {
        let orders = self.read()?;

        let mut matching: Vec<Order> = orders
            .values()
            .filter(|order| order.is_active() && predicate(order))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));

        Ok(matching)
    }
}

impl Default for InMemoryOrderService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn get_all(&self) -> Result<Vec<Order>> {
        let orders = self.read()?;

        Ok(orders
            .values()
            .filter(|order| order.is_active())
            .cloned()
            .collect())
    }

    async fn get_recent(&self) -> Result<Vec<Order>> {
        let cutoff = Utc::now() - self.recent_window;
        self.active_newest_first(|order| order.entry_date > cutoff)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Order>> {
        let orders = self.read()?;

        Ok(orders.get(id).cloned())
    }

    async fn get_within_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        self.active_newest_first(|order| start <= order.entry_date && order.entry_date <= end)
    }

    async fn create(&self, mut order: Order) -> Result<Order> {
        let mut orders = self.write()?;

        if orders.contains_key(&order.id) {
            return Err(StorageError::AlreadyExists { id: order.id }.into());
        }

        order.entry_date = Utc::now();
        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order> {
        let mut orders = self.write()?;

        let stored = orders
            .get_mut(&order.id)
            .ok_or(StorageError::NotFound { id: order.id })?;
        *stored = order.clone();

        Ok(order)
    }
}
