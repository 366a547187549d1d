pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::CatalogService;
pub use domain::book::{Book, IsbnGenerator, RandomIsbnGenerator, SearchResult};
pub use infra::books_api::{GoogleBooksClient, MetadataLookup};
pub use storage::catalog::{AddOutcome, CatalogStore, InMemoryCatalogStore};
