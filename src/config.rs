//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream photo API.
pub const DEFAULT_PHOTOS_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream photo API
    pub photos_api_url: String,
    /// Photos requested per upstream page
    pub page_size: u32,
    /// Maximum number of pages kept in the page cache
    pub page_cache_capacity: usize,
    /// Largest `page` value accepted from a request
    pub max_page: u32,
    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
    /// Warm the cache for the next page after each page request
    pub prefetch_next_page: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PHOTOS_API_URL` - Upstream API base URL (default: JSONPlaceholder)
    /// - `PAGE_SIZE` - Photos per page (default: 10)
    /// - `PAGE_CACHE_CAPACITY` - Cached pages (default: 500)
    /// - `MAX_PAGE` - Largest accepted `page` parameter (default: 500)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream timeout (default: 30)
    /// - `PREFETCH_NEXT_PAGE` - Prefetch toggle (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            photos_api_url: env::var("PHOTOS_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.photos_api_url),
            page_size: env_or("PAGE_SIZE", defaults.page_size),
            page_cache_capacity: env_or("PAGE_CACHE_CAPACITY", defaults.page_cache_capacity),
            max_page: env_or("MAX_PAGE", defaults.max_page),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            prefetch_next_page: env_or("PREFETCH_NEXT_PAGE", defaults.prefetch_next_page),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            photos_api_url: DEFAULT_PHOTOS_API_URL.to_string(),
            page_size: 10,
            // 500 is the number of pages the upstream API serves
            page_cache_capacity: 500,
            max_page: 500,
            request_timeout_secs: 30,
            prefetch_next_page: true,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
