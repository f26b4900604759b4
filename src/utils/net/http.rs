//! Shared HTTP clients for outbound provider calls
//!
//! Providers with the same timeout share one connection pool. Clients are
//! cached by timeout so a 20 second translation mirror and a 60 second
//! speech backend each get their own pool.

use dashmap::DashMap;
use reqwest::{Client, ClientBuilder};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest provider error body echoed back in error messages
pub const ERROR_PREVIEW_LIMIT: usize = 500;

const USER_AGENT: &str = concat!("lingua-gateway/", env!("CARGO_PKG_VERSION"));

/// Timeout-specific client cache
static TIMEOUT_CLIENT_CACHE: OnceLock<DashMap<u64, Arc<Client>>> = OnceLock::new();

/// Get or create a client with a specific timeout
pub fn get_client_with_timeout(timeout: Duration) -> Arc<Client> {
    let cache = TIMEOUT_CLIENT_CACHE.get_or_init(DashMap::new);
    let timeout_ms = timeout.as_millis() as u64;

    cache
        .entry(timeout_ms)
        .or_insert_with(|| {
            debug!(timeout_ms, "Creating cached HTTP client for timeout");
            Arc::new(create_client(timeout))
        })
        .clone()
}

fn create_client(timeout: Duration) -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(32)
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .tcp_nodelay(true)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to create HTTP client, falling back to default: {}", e);
            Client::new()
        })
}

/// Shorten a provider response body for inclusion in an error message
pub fn preview_body(body: &str) -> String {
    if body.chars().count() <= ERROR_PREVIEW_LIMIT {
        return body.to_string();
    }
    let truncated: String = body.chars().take(ERROR_PREVIEW_LIMIT).collect();
    format!("{}...", truncated)
}
