//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_BODY_LIMIT_BYTES, DEFAULT_PAGE_SIZE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MAX_PAGE_SIZE,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Page size used when a list request carries no usable `limit`
    pub default_page_size: u64,
    /// Upper bound applied to every requested `limit`
    pub max_page_size: u64,
    pub body_limit_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let max_page_size = parse_var("MAX_PAGE_SIZE")
            .filter(|v: &u64| *v > 0)
            .unwrap_or(MAX_PAGE_SIZE);

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT")
                .or_else(|| parse_var("PORT"))
                .unwrap_or(DEFAULT_SERVER_PORT),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE")
                .filter(|v: &u64| *v > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(max_page_size),
            max_page_size,
            body_limit_bytes: parse_var("BODY_LIMIT_BYTES").unwrap_or(DEFAULT_BODY_LIMIT_BYTES),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
