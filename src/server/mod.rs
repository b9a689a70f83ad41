//! Server module for building the orders HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Order routes backed by an injected `OrderService`
//! - Health check routes
//! - Any custom routes supplied by the caller

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
