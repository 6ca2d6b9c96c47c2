use siloshare_core::store::{StoreConfig, DEFAULT_RETENTION_SECS};

use crate::auth::basic::BasicAuthConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the basic-auth credential has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Note store settings (retention window).
    pub store: StoreConfig,
    /// Interval of the background expiry sweep in seconds. `0` disables it
    /// and leaves expiry to the list endpoint.
    pub sweep_interval_secs: u64,
    /// Shared credential for the notes API.
    pub auth: BasicAuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `HOST`                      | `0.0.0.0`               |
    /// | `PORT`                      | `8080`                  |
    /// | `CORS_ORIGINS`              | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                    |
    /// | `NOTES_RETENTION_SECS`      | `600`                   |
    /// | `NOTES_SWEEP_INTERVAL_SECS` | `0`                     |
    ///
    /// See [`BasicAuthConfig::from_env`] for the required credential vars.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let retention_secs: i64 = std::env::var("NOTES_RETENTION_SECS")
            .unwrap_or_else(|_| DEFAULT_RETENTION_SECS.to_string())
            .parse()
            .expect("NOTES_RETENTION_SECS must be a valid i64");

        let sweep_interval_secs: u64 = std::env::var("NOTES_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("NOTES_SWEEP_INTERVAL_SECS must be a valid u64");

        let auth = BasicAuthConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store: StoreConfig { retention_secs },
            sweep_interval_secs,
            auth,
        }
    }
}
