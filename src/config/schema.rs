//! Configuration schema definitions.
//!
//! Every section has a `Default` that reproduces the built-in behavior, so
//! running without a config file serves the stock routes on port 3000.

use serde::{Deserialize, Serialize};

use crate::decode::DEFAULT_BODY_LIMIT;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Headers stamped on every response.
    pub headers: HeaderConfig,

    /// Admin group credentials.
    pub admin: AdminConfig,

    /// Request body limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Response headers injected by the server-header interceptor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Value of the `Server` header.
    pub server: String,

    /// Name of the extra marker header.
    pub marker_name: String,

    /// Value of the extra marker header.
    pub marker_value: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            server: "BlueBot/1.0".to_string(),
            marker_name: "thisIsNotAHeader".to_string(),
            marker_value: "thisDoesNotMeanAnything".to_string(),
        }
    }
}

/// Basic authentication settings for `/admin`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,

    pub password: String,

    /// Realm advertised in the `WWW-Authenticate` challenge.
    pub realm: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            // WARNING: demo credentials. Override them in a config file.
            username: "marc".to_string(),
            password: "1234".to_string(),
            realm: "Restricted".to_string(),
        }
    }
}

/// Request body limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum body size in bytes collected by the decoders.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_behavior() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.headers.server, "BlueBot/1.0");
        assert_eq!(config.headers.marker_name, "thisIsNotAHeader");
        assert_eq!(config.admin.username, "marc");
        assert_eq!(config.admin.password, "1234");
        assert_eq!(config.admin.realm, "Restricted");
        assert_eq!(config.limits.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:8080"

            [admin]
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.admin.username, "marc");
        assert_eq!(config.admin.password, "hunter2");
        assert_eq!(config.headers.server, "BlueBot/1.0");
    }
}
