//! Centralized configuration (environment variables + defaults).

use std::time::Duration;

pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_LOOKUP_MAX_RESULTS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_RUST_LOG: &str = "info";

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Book-search endpoint queried by the metadata lookup.
pub fn books_api_url() -> String {
    non_empty_var("BOOKS_API_URL").unwrap_or_else(|| DEFAULT_BOOKS_API_URL.to_string())
}

/// Result cap applied to free-text lookups (at least 1).
pub fn lookup_max_results() -> u32 {
    parse_max_results(non_empty_var("LOOKUP_MAX_RESULTS").as_deref())
}

/// Optional request timeout for lookups. Unset means no timeout.
pub fn lookup_timeout() -> Option<Duration> {
    parse_timeout_secs(non_empty_var("LOOKUP_TIMEOUT_SECS").as_deref())
}

/// Socket address the API server listens on.
pub fn bind_addr() -> String {
    non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Log filter directive for the tracing subscriber.
pub fn rust_log() -> String {
    non_empty_var("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string())
}

fn parse_max_results(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_LOOKUP_MAX_RESULTS)
        .max(1)
}

fn parse_timeout_secs(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
