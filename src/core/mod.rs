//! Core module containing the order model, store contract and shared types

pub mod business_days;
pub mod entity;
pub mod error;
pub mod order;
pub mod service;
pub mod validation;

pub use business_days::{DateRange, calculate_start_date, calculate_start_date_from};
pub use entity::Entity;
pub use error::{ApiError, ApiResult, StorageError, ValidationError};
pub use order::Order;
pub use service::OrderService;
