/**
 * Server Configuration
 *
 * This module loads the server settings from environment variables and
 * opens the SQLite connection pool.
 *
 * # Environment Variables
 *
 * | Variable           | Default                          |
 * |--------------------|----------------------------------|
 * | `DATABASE_URL`     | `sqlite://walletbox.db?mode=rwc` |
 * | `JWT_SECRET`       | development fallback (warned)    |
 * | `SESSION_TTL_SECS` | `86400`                          |
 * | `SERVER_PORT`      | `3000`                           |
 * | `BCRYPT_COST`      | `bcrypt::DEFAULT_COST`           |
 * | `COOKIE_SECURE`    | `false`                          |
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://walletbox.db?mode=rwc";
const DEV_JWT_SECRET: &str = "walletbox-dev-secret-change-in-production";
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_PORT: u16 = 3000;

/// Server settings
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub cookie_secure: bool,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie_secure", &self.cookie_secure)
            .finish_non_exhaustive()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            port: DEFAULT_PORT,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` when a numeric or boolean variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                defaults.jwt_secret
            }
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret,
            session_ttl_secs: parse_var("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            port: parse_var("SERVER_PORT", defaults.port)?,
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            cookie_secure: parse_flag("COOKIE_SECURE")?,
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(name: &'static str) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            _ => Err(ConfigError::InvalidValue { name, value }),
        },
        Err(_) => Ok(false),
    }
}

/// Open the connection pool and run migrations
///
/// In-memory URLs get a single long-lived connection, since every SQLite
/// connection to `:memory:` would otherwise see its own empty database.
///
/// # Errors
///
/// Connection failures and migration failures.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?;
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Fresh migrated in-memory database
pub async fn connect_in_memory() -> Result<SqlitePool, BackendError> {
    load_database("sqlite::memory:").await
}
