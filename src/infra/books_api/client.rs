// HTTP client for a Google Books compatible volumes endpoint.

use crate::domain::book::{Book, SearchResult};
use crate::infra::books_api::schema::{map_response, map_volume, VolumesResponse};
use crate::infra::books_api::{LookupError, MetadataLookup};
use crate::infra::config;
use async_trait::async_trait;
use std::time::Duration;

pub struct GoogleBooksClient {
    client: reqwest::Client,
    endpoint: String,
    max_results: u32,
}

impl GoogleBooksClient {
    pub fn new(endpoint: impl Into<String>, max_results: u32, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            max_results: max_results.max(1),
        })
    }

    /// Builds a client from `BOOKS_API_URL`, `LOOKUP_MAX_RESULTS` and `LOOKUP_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(
            config::books_api_url(),
            config::lookup_max_results(),
            config::lookup_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_volumes(&self, query: &str, cap: Option<u32>) -> Result<VolumesResponse, LookupError> {
        let mut request = self.client.get(&self.endpoint).query(&[("q", query)]);
        if let Some(cap) = cap {
            request = request.query(&[("maxResults", cap)]);
        }

        let response = request.send().await.map_err(LookupError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        response
            .json::<VolumesResponse>()
            .await
            .map_err(LookupError::Decode)
    }
}

#[async_trait]
impl MetadataLookup for GoogleBooksClient {
    async fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        match self.fetch_volumes(query, Some(self.max_results)).await {
            Ok(response) => {
                let results = map_response(&response);
                tracing::debug!(query, count = results.len(), "Metadata search completed");
                results
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Metadata search failed, returning no results");
                Vec::new()
            }
        }
    }

    async fn fetch_by_title(&self, title: &str) -> Option<Book> {
        if title.trim().is_empty() {
            return None;
        }
        match self.fetch_volumes(title, None).await {
            Ok(response) => {
                let first = response.items.first().map(|v| {
                    let mut book = map_volume(v).into_book();
                    if book.title.trim().is_empty() {
                        book.title = title.trim().to_string();
                    }
                    book
                });
                tracing::debug!(title, found = first.is_some(), "Metadata title lookup completed");
                first
            }
            Err(e) => {
                tracing::warn!(title, error = %e, "Metadata title lookup failed");
                None
            }
        }
    }
}
