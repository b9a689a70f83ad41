//! Shared fixtures for integration tests
//!
//! Provides order builders, store doubles that fail on demand, and a helper
//! that wires a store into a `TestServer`.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod support;
//! use support::*;
//! ```

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use orders_api::prelude::*;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// An active order with a fixed entry date
pub fn order_at(name: &str, entry_date: DateTime<Utc>) -> Order {
    Order::new(name, format!("{name} description"), true).with_entry_date(entry_date)
}

/// A soft-deleted order with a fixed entry date
pub fn deleted_order_at(name: &str, entry_date: DateTime<Utc>) -> Order {
    let mut order = order_at(name, entry_date);
    order.soft_delete();
    order
}

pub fn names(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.name.as_str()).collect()
}

/// Test server over the given store
pub fn server_with(service: Arc<dyn OrderService>) -> TestServer {
    let app = ServerBuilder::new()
        .with_shared_order_service(service)
        .build()
        .expect("Failed to build app");

    TestServer::new(app)
}

/// Test server over a fresh in-memory store, plus a handle to that store
pub fn in_memory_server() -> (TestServer, InMemoryOrderService) {
    let store = InMemoryOrderService::new();
    let server = server_with(Arc::new(store.clone()));
    (server, store)
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// Every call fails, as if the database were unreachable
pub struct FailingOrderService;

fn unavailable<T>() -> Result<T> {
    Err(anyhow!("database unavailable"))
}

#[async_trait]
impl OrderService for FailingOrderService {
    async fn get_all(&self) -> Result<Vec<Order>> {
        unavailable()
    }

    async fn get_recent(&self) -> Result<Vec<Order>> {
        unavailable()
    }

    async fn get_by_id(&self, _id: &Uuid) -> Result<Option<Order>> {
        unavailable()
    }

    async fn get_within_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        unavailable()
    }

    async fn create(&self, _order: Order) -> Result<Order> {
        unavailable()
    }

    async fn update(&self, _order: Order) -> Result<Order> {
        unavailable()
    }
}

/// Reads and creates go to an in-memory store, updates always fail
pub struct FailingUpdateService {
    pub inner: InMemoryOrderService,
}

#[async_trait]
impl OrderService for FailingUpdateService {
    async fn get_all(&self) -> Result<Vec<Order>> {
        self.inner.get_all().await
    }

    async fn get_recent(&self) -> Result<Vec<Order>> {
        self.inner.get_recent().await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Order>> {
        self.inner.get_by_id(id).await
    }

    async fn get_within_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Order>> {
        self.inner.get_within_range(start, end).await
    }

    async fn create(&self, order: Order) -> Result<Order> {
        self.inner.create(order).await
    }

    async fn update(&self, _order: Order) -> Result<Order> {
        Err(anyhow!("write conflict"))
    }
}
