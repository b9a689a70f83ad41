//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_health_routes, build_order_routes};
use crate::config::AppConfig;
use crate::core::OrderService;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the orders HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_order_service(InMemoryOrderService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    order_service: Option<Arc<dyn OrderService>>,
    config: AppConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            order_service: None,
            config: AppConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the order service (required)
    pub fn with_order_service(mut self, service: impl OrderService + 'static) -> Self {
        self.order_service = Some(Arc::new(service));
        self
    }

    /// Set an already shared order service
    pub fn with_shared_order_service(mut self, service: Arc<dyn OrderService>) -> Self {
        self.order_service = Some(service);
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes that sit next to the order routes
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Health routes, order routes and custom routes, wrapped in request tracing.
    pub fn build(mut self) -> Result<Router> {
        let order_service = self.order_service.take().ok_or_else(|| {
            anyhow::anyhow!("OrderService is required. Call .with_order_service()")
        })?;

        let mut app = build_health_routes().merge(build_order_routes(AppState::new(order_service)));

        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds the configured address and handles SIGTERM and Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
