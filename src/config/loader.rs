//! Load [`AppConfig`] from process environment (after `.env`, if present).

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read `.env` then the environment. Unset keys keep their defaults.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::Load(e.to_string()));
        }
    }
    load_with(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary key lookup.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AppConfig::default();
    Ok(AppConfig {
        database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
        bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
        port: parsed(&lookup, "PORT")?.unwrap_or(defaults.port),
        max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
        request_body_limit: parsed(&lookup, "REQUEST_BODY_LIMIT")?.unwrap_or(defaults.request_body_limit),
    })
}

fn parsed<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
