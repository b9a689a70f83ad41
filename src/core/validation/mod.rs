//! Request validation
//!
//! Payloads are decoded into typed request structs by [`OptionalJson`] and
//! checked against the field rules in [`validators`] before anything reaches
//! a store.

pub mod extractor;
pub mod request;
pub mod validators;

pub use extractor::OptionalJson;
pub use request::CreateOrderRequest;
