//! Logging subscriber initialisation

use crate::config::{LogFormat, LoggingConfig};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config));

    match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()?,
    }

    Ok(())
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},hyper=warn,tower=warn", config.level))
    })
}
