//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://snip.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://snip.db?mode=rwc".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a SQLite connection string
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `DB_MAX_CONNECTIONS` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Pool size: {}", self.db_max_connections);
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects the environment to be populated already (e.g. via
/// `dotenvy::dotenv()` in `main`).
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
