//! Configuration loading and management

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML config file
pub const CONFIG_PATH_ENV: &str = "ORDERS_API_CONFIG";
/// Environment variable overriding the bind host
pub const HOST_ENV: &str = "ORDERS_API_HOST";
/// Environment variable overriding the bind port
pub const PORT_ENV: &str = "ORDERS_API_PORT";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Order query settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// How far back `GET /orders/recent` looks
    pub recent_window_hours: u32,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            recent_window_hours: 24,
        }
    }
}

impl OrdersConfig {
    pub fn recent_window(&self) -> Duration {
        Duration::hours(i64::from(self.recent_window_hours))
    }
}

/// Complete application configuration
///
/// Every section is optional in YAML and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub orders: OrdersConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads the file named by `ORDERS_API_CONFIG` when set, otherwise starts
    /// from defaults, then applies `ORDERS_API_HOST` and `ORDERS_API_PORT`.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with a custom variable lookup
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };

        if let Some(host) = lookup(HOST_ENV) {
            config.server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.server.port = port
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV, port))?;
        }

        Ok(config)
    }
}
