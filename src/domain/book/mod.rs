//! Catalog entries and lookup candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod isbn;

pub use isbn::{IsbnGenerator, RandomIsbnGenerator, GENERATED_ISBN_LEN};

/// Author recorded when a book is added without one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A book held in the catalog. The ISBN is the catalog key.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_available: bool,
    pub date_added: DateTime<Utc>,
    pub summary: String,
    /// Optional: URL to the cover image.
    pub cover_image_url: Option<String>,
    /// Optional: hex or CSS color for the spine.
    pub spine_color: Option<String>,
}

impl Book {
    /// A book with only a title. Author and ISBN are left empty so the store back-fills them.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            isbn: String::new(),
            is_available: true,
            date_added: Utc::now(),
            summary: String::new(),
            cover_image_url: None,
            spine_color: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// An unconfirmed candidate returned by the metadata lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct SearchResult {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub summary: String,
    pub thumbnail_url: String,
}

impl SearchResult {
    /// Converts the candidate into a catalog book stamped with the current time.
    pub fn into_book(self) -> Book {
        let cover_image_url = if self.thumbnail_url.trim().is_empty() {
            None
        } else {
            Some(self.thumbnail_url)
        };
        Book {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            is_available: true,
            date_added: Utc::now(),
            summary: self.summary,
            cover_image_url,
            spine_color: None,
        }
    }
}
