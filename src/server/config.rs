//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";

/// Port listened on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration read from the environment.
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// TCP port to listen on, bound on all interfaces
    pub port: u16,
    /// Whether pending migrations are applied at startup
    pub run_migrations: bool,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Variables
    /// - `DATABASE_URL` - optional, defaults to [`DEFAULT_DATABASE_URL`]
    /// - `PORT` - optional, defaults to [`DEFAULT_PORT`]
    /// - `RUN_MIGRATIONS` - optional boolean, defaults to `true`
    ///
    /// # Returns
    /// - `Ok(Config)` - All present variables were valid
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{:?} is not a valid port number", port),
            })?,
            None => DEFAULT_PORT,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "RUN_MIGRATIONS".to_string(),
                reason: format!("{:?} is not a boolean", value),
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            run_migrations,
        })
    }
}

/// Rewrite the legacy `postgres://` scheme to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
