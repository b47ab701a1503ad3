//! Settings consumed by the server binary and the router.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/nc_games";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9092;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound on request bodies, in bytes.
    pub request_body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_address: DEFAULT_BIND_ADDRESS.into(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, crate::error::ConfigError> {
        let addr = format!("{}:{}", self.bind_address, self.port);
        addr.parse().map_err(|_| crate::error::ConfigError::Invalid {
            key: "BIND_ADDRESS",
            value: self.bind_address.clone(),
        })
    }
}
