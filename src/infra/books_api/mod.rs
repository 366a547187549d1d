//! External book-metadata lookup.

pub mod client;
pub mod schema;

pub use client::GoogleBooksClient;

use crate::domain::book::{Book, SearchResult};
use async_trait::async_trait;
use thiserror::Error;

/// Failures inside a lookup. They never cross the `MetadataLookup` boundary.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Resolves free-text queries into catalog candidates.
///
/// Implementations degrade every failure to an empty or absent result.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Capped search; untitled results are dropped.
    async fn search(&self, query: &str) -> Vec<SearchResult>;

    /// Uncapped search returning only the first result as a book.
    async fn fetch_by_title(&self, title: &str) -> Option<Book>;
}
