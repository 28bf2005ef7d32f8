//! HTTP server configuration.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Bind address, log filter, request timeout, and CORS origins.
///
/// Every field has a working default, so an empty environment yields a
/// runnable development server on `0.0.0.0:8080`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing filter directive, e.g. `info,risk_appetite=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated allowed CORS origins. Unset means permissive,
    /// which suits local form development.
    pub cors_origins: Option<String>,
}

impl ServerConfig {
    /// Resolves the address to bind the listener to.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBindAddress` when the host and
    /// port do not form a parseable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }

    /// The per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parses the comma-separated CORS origins into a list.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(origins) = &self.cors_origins else {
            return Vec::new();
        };
        origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validates the server settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for port 0, a timeout outside 1-300
    /// seconds, or an unparseable bind address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,risk_appetite=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
