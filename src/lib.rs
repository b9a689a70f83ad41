//! # Orders API
//!
//! A small REST service managing orders over an injected store.
//!
//! ## Features
//!
//! - **Soft Delete**: Orders are flagged as deleted, never removed
//! - **Recent Orders**: Orders entered within the last 24 hours
//! - **Business-Day Windows**: Orders entered within the last N business days
//! - **Typed Errors**: Validation, not-found and store failures map to 400/404/500
//! - **Pluggable Storage**: Any `OrderService` implementation; in-memory included
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders_api::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_order_service(InMemoryOrderService::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod observability;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, DateRange, Entity, Order, OrderService, StorageError,
        ValidationError, calculate_start_date, calculate_start_date_from,
        validation::CreateOrderRequest,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderService;

    // === Config ===
    pub use crate::config::{AppConfig, LogFormat, LoggingConfig, OrdersConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
