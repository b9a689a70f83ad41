//! Storage implementations for orders

pub mod in_memory;

pub use in_memory::InMemoryOrderService;
