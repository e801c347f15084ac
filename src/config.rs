use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Seconds a table snapshot stays in the cache
    pub table_cache_ttl: u64,
    /// Maximum rows per cached entity set
    pub table_row_limit: i64,
    /// Seconds of inactivity before a session is discarded
    pub session_idle_timeout: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
        if database_url.trim().is_empty() {
            return Err("DATABASE_URL must not be empty".to_string());
        }

        let table_row_limit: i64 = env::var("TABLE_ROW_LIMIT")
            .unwrap_or_else(|_| DEFAULT_TABLE_ROW_LIMIT.to_string())
            .parse()
            .map_err(|_| "Invalid TABLE_ROW_LIMIT")?;

        if table_row_limit <= 0 {
            return Err("TABLE_ROW_LIMIT must be greater than zero".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url,
            table_cache_ttl: seconds_from_env("TABLE_CACHE_TTL", DEFAULT_TABLE_CACHE_TTL_SECONDS)?,
            table_row_limit,
            session_idle_timeout: seconds_from_env(
                "SESSION_IDLE_TIMEOUT",
                DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS,
            )?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn seconds_from_env(name: &str, default: u64) -> Result<u64, String> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    parse_seconds(name, &raw)
}

/// Duration in whole seconds, at most [`MAX_DURATION_SECONDS`].
fn parse_seconds(name: &str, raw: &str) -> Result<u64, String> {
    let seconds: u64 = raw.trim().parse().map_err(|_| format!("Invalid {name}"))?;
    if seconds > MAX_DURATION_SECONDS {
        return Err(format!("{name} must not exceed {MAX_DURATION_SECONDS} seconds"));
    }
    Ok(seconds)
}
