//! Orders API seeded with a week of history
//!
//! Run with `cargo run --example seeded_api`, then try:
//! - GET    /orders
//! - GET    /orders/recent
//! - GET    /orders/recent-business-days?numberOfDays=3
//! - POST   /orders/create   {"name": "...", "description": "..."}
//! - DELETE /orders/{id}

use chrono::Duration;
use orders_api::observability::init_tracing;
use orders_api::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    let store = InMemoryOrderService::new();
    populate_history(&store)?;

    println!("🚀 Orders API demo with {} seeded orders", store.len()?);
    println!("🌐 Listening on http://{}", config.server.bind_address());

    ServerBuilder::new()
        .with_config(config)
        .with_order_service(store)
        .serve()
        .await
}

/// One order per day for the past week, plus one soft-deleted order
fn populate_history(store: &InMemoryOrderService) -> Result<()> {
    let now = Utc::now();

    for days_ago in 0..7 {
        let order = Order::new(
            format!("ORD-{:03}", days_ago + 1),
            format!("Order entered {} day(s) ago", days_ago),
            days_ago % 2 == 0,
        )
        .with_entry_date(now - Duration::days(days_ago));
        store.import(order)?;
    }

    let mut cancelled = Order::new("ORD-CANCELLED", "Soft-deleted order", false);
    cancelled.soft_delete();
    store.import(cancelled)?;

    Ok(())
}
