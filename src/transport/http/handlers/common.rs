use crate::transport::http::types::{json_400, ApiResponse};
use axum::http::StatusCode;
use axum::Json;

/// Presence check for a required title; returns the trimmed value.
pub fn require_title(title: &str) -> Result<&str, (StatusCode, Json<ApiResponse>)> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(json_400("Field 'title' is required"));
    }
    Ok(trimmed)
}

/// Normalizes an ISBN taken from a URL path segment.
pub fn normalize_isbn(isbn: &str) -> &str {
    isbn.trim()
}
