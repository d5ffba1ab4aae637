//! Application configuration

use std::env;
use std::path::PathBuf;

use handler_buscar::DatastoreConfig;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the gateway to
    pub host: String,

    /// Port for the gateway
    pub port: u16,

    /// Path to the JSON backing store read by the lookup handler
    pub datastore_path: PathBuf,

    /// Largest request body accepted, in bytes
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("AMIGO_GATEWAY_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            // Hosting platforms usually hand out the port as PORT.
            port: env::var("AMIGO_GATEWAY_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),

            datastore_path: DatastoreConfig::from_env().path,

            max_body_bytes: env::var("AMIGO_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
