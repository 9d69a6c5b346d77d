//! Deployment settings, read once from the environment at startup.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Immutable process-wide settings.
///
/// Loaded once in `main` and passed explicitly to the components that
/// need them; nothing in the codebase reads the environment after
/// startup.
#[derive(Clone)]
pub struct Settings {
    pub env: String,
    pub log_level: String,
    pub project_name: String,
    pub app_version: String,
    pub port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_pool_size: u32,
    pub db_max_overflow: u32,
    /// Seconds to wait for a pooled connection before giving up
    pub db_pool_timeout: u64,
    /// Per-connection statement timeout, 0 disables it
    pub db_statement_timeout_ms: u64,
    /// Comma-separated CORS origins, "*" allows any
    pub allow_origins: String,
    pub db_socket_dir: String,
    pub cloudsql_connection_name: String,
    /// Whether an empty DB_PASSWORD is a configuration error
    pub db_require_password: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            env: var_or("ENV", "local"),
            log_level: var_or("LOG_LEVEL", "info"),
            project_name: var_or("PROJECT_NAME", "Starter Project"),
            app_version: var_or("APP_VERSION", "0.1.0"),
            port: parse_var("PORT", 8000)?,
            db_user: var_or("DB_USER", "postgres"),
            db_password: var_or("DB_PASSWORD", ""),
            db_host: var_or("DB_HOST", "localhost"),
            db_port: parse_var("DB_PORT", 5432)?,
            db_name: var_or("DB_NAME", "starter-project"),
            db_pool_size: parse_var("DB_POOL_SIZE", 5)?,
            db_max_overflow: parse_var("DB_MAX_OVERFLOW", 10)?,
            db_pool_timeout: parse_var("DB_POOL_TIMEOUT", 30)?,
            db_statement_timeout_ms: parse_var("DB_STATEMENT_TIMEOUT_MS", 0)?,
            allow_origins: var_or("ALLOW_ORIGINS", "*"),
            db_socket_dir: var_or("DB_SOCKET_DIR", "/cloudsql"),
            cloudsql_connection_name: var_or("CLOUDSQL_CONNECTION_NAME", ""),
            db_require_password: parse_var("DB_REQUIRE_PASSWORD", true)?,
        })
    }
}

// The password must never reach logs, so Debug is hand-written.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("project_name", &self.project_name)
            .field("app_version", &self.app_version)
            .field("port", &self.port)
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_name", &self.db_name)
            .field("db_pool_size", &self.db_pool_size)
            .field("db_max_overflow", &self.db_max_overflow)
            .field("db_pool_timeout", &self.db_pool_timeout)
            .field("db_statement_timeout_ms", &self.db_statement_timeout_ms)
            .field("allow_origins", &self.allow_origins)
            .field("db_socket_dir", &self.db_socket_dir)
            .field("cloudsql_connection_name", &self.cloudsql_connection_name)
            .field("db_require_password", &self.db_require_password)
            .finish()
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|_| {
            AppError::config(format!(
                "environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
        Err(_) => Ok(default),
    }
}
