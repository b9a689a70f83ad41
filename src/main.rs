//! Orders API server binary

use orders_api::observability::init_tracing;
use orders_api::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging)?;

    let store = InMemoryOrderService::new().with_recent_window(config.orders.recent_window());

    tracing::info!(
        recent_window_hours = config.orders.recent_window_hours,
        "starting orders-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_config(config)
        .with_order_service(store)
        .serve()
        .await
}
