//! The Catalog Service.
//!
//! This module sits between the HTTP layer and the catalog. It is responsible for:
//! 1.  Sharing one `CatalogStore` between concurrent handlers.
//! 2.  Enriching new entries through the `MetadataLookup` before they are stored.

use crate::domain::book::{Book, SearchResult};
use crate::infra::books_api::MetadataLookup;
use crate::storage::catalog::CatalogStore;

pub use crate::storage::catalog::AddOutcome;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct CatalogService {
    store: RwLock<Box<dyn CatalogStore>>,
    lookup: Arc<dyn MetadataLookup>,
}

impl CatalogService {
    pub fn new(store: Box<dyn CatalogStore>, lookup: Arc<dyn MetadataLookup>) -> Self {
        Self {
            store: RwLock::new(store),
            lookup,
        }
    }

    pub async fn add(&self, book: Book) -> AddOutcome {
        self.store.write().await.add(book)
    }

    pub async fn remove(&self, isbn: &str) -> bool {
        self.store.write().await.remove(isbn)
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.store.read().await.get_by_isbn(isbn)
    }

    pub async fn search_local(&self, query: &str) -> Vec<Book> {
        self.store.read().await.search_local(query)
    }

    pub async fn list_available(&self) -> Vec<Book> {
        self.store.read().await.list_available()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Candidates from the external lookup. Never fails; errors yield an empty list.
    pub async fn search_remote(&self, query: &str) -> Vec<SearchResult> {
        self.lookup.search(query).await
    }

    /// Looks `title` up externally and catalogues the first hit.
    ///
    /// Without a hit, a minimal book is stored (author "Unknown", generated ISBN). Returns the
    /// catalogued book (the existing entry when the ISBN was already present), or `None` when
    /// the store could not generate an unused ISBN.
    pub async fn add_with_details(&self, title: &str) -> Option<Book> {
        self.add_first_hit(title).await.into_book()
    }

    /// Adds the search candidate carrying `isbn`, or falls back to `add_with_details`.
    pub async fn add_from_lookup(&self, title: &str, isbn: Option<&str>) -> AddOutcome {
        if let Some(isbn) = isbn.map(str::trim).filter(|i| !i.is_empty()) {
            let candidate = self
                .lookup
                .search(title)
                .await
                .into_iter()
                .find(|r| r.isbn == isbn);
            if let Some(candidate) = candidate {
                return self.add(candidate.into_book()).await;
            }
            tracing::debug!(title, isbn, "Selected ISBN not among search results");
        }

        self.add_first_hit(title).await
    }

    async fn add_first_hit(&self, title: &str) -> AddOutcome {
        // The store lock is not held across the network call.
        let book = match self.lookup.fetch_by_title(title).await {
            Some(found) => found,
            None => {
                tracing::info!(title, "No metadata found, adding minimal entry");
                Book::titled(title)
            }
        };
        self.add(book).await
    }
}
