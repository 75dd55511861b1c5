use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Errors raised while reading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be a valid IP address, got '{0}'")]
    InvalidHost(String),

    #[error("PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("REQUEST_TIMEOUT_SECS must be a valid u64, got '{0}'")]
    InvalidTimeout(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Fixture file replacing the built-in wishlists, if set.
    pub fixtures_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `WISHLIST_FIXTURES_PATH` | unset                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset, so `PORT=` falls back to `3000`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = var("PORT").unwrap_or_else(|| "3000".into());
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout = var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|| "30".into());
        let request_timeout_secs: u64 = timeout
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout(timeout))?;

        let fixtures_path = var("WISHLIST_FIXTURES_PATH").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            fixtures_path,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
