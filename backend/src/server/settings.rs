//! Process settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `CAMPUS_PRINT_*` environment variables over
//! an optional configuration file. The database URL additionally falls back
//! to the conventional `DATABASE_URL` variable.

use std::env;
use std::time::Duration;

use campus_print::outbound::persistence::{DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("database URL missing: set CAMPUS_PRINT_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    #[error("pool_max_size must be at least 1")]
    ZeroPoolSize,
}

/// CORS origins as configured.
///
/// The environment layer turns a comma-separated value into a list but
/// leaves a single origin as a plain string, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorsOrigins {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAMPUS_PRINT")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Browser origins allowed by CORS, comma separated in the environment.
    #[ortho_config(skip_cli)]
    pub cors_origins: Option<CorsOrigins>,
    pub pool_max_size: Option<u32>,
    pub pool_min_idle: Option<u32>,
    /// Checkout timeout for pooled connections, in seconds.
    pub pool_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Identity provider endpoint reserved for real authentication.
    pub auth_provider_url: Option<String>,
    pub auth_provider_key: Option<String>,
}

impl AppSettings {
    /// Resolve the database URL, falling back to `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when neither source is
    /// set or both are blank.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        self.database_url
            .clone()
            .or_else(|| env::var(FALLBACK_DATABASE_URL_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured origins with surrounding whitespace and empty entries
    /// removed.
    pub fn cors_origins(&self) -> Vec<String> {
        let configured: Vec<&str> = match &self.cors_origins {
            Some(CorsOrigins::One(origins)) => origins.split(',').collect(),
            Some(CorsOrigins::Many(origins)) => origins.iter().map(String::as_str).collect(),
            None => vec![DEFAULT_CORS_ORIGINS],
        };
        configured
            .into_iter()
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Pool limits for `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroPoolSize`] when `pool_max_size` is 0.
    pub fn pool_config(&self, database_url: String) -> Result<PoolConfig, SettingsError> {
        let max_size = self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE);
        if max_size == 0 {
            return Err(SettingsError::ZeroPoolSize);
        }
        let config = PoolConfig::new(database_url)
            .with_max_size(max_size)
            .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE)));
        Ok(match self.pool_timeout_secs {
            Some(secs) => config.with_connection_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }

    pub fn auth_provider_configured(&self) -> bool {
        self.auth_provider_url.is_some() && self.auth_provider_key.is_some()
    }
}
