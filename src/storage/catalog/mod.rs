pub mod memory;

pub use memory::InMemoryCatalogStore;

use crate::domain::book::Book;

/// Result of `CatalogStore::add`.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The stored book, after back-filling.
    Inserted(Book),
    /// The ISBN was already catalogued; carries the existing entry. The store is unchanged.
    Duplicate(Book),
    /// No free identifier could be generated for a book without an ISBN. The store is unchanged.
    IsbnUnavailable,
}

impl AddOutcome {
    pub fn book(&self) -> Option<&Book> {
        match self {
            AddOutcome::Inserted(b) | AddOutcome::Duplicate(b) => Some(b),
            AddOutcome::IsbnUnavailable => None,
        }
    }

    pub fn into_book(self) -> Option<Book> {
        match self {
            AddOutcome::Inserted(b) | AddOutcome::Duplicate(b) => Some(b),
            AddOutcome::IsbnUnavailable => None,
        }
    }

    pub fn inserted(&self) -> bool {
        matches!(self, AddOutcome::Inserted(_))
    }
}

/// Contract for any backing collection of catalog books.
///
/// The ISBN is the key: implementations must keep at most one book per ISBN,
/// including identifiers they generate themselves.
pub trait CatalogStore: Send + Sync {
    /// Inserts `book` unless its ISBN is already catalogued.
    ///
    /// Missing ISBN and author are back-filled, `date_added` is stamped and the book is
    /// marked available.
    fn add(&mut self, book: Book) -> AddOutcome;

    /// Removes the first book with `isbn`. Returns whether one was found.
    fn remove(&mut self, isbn: &str) -> bool;

    fn get_by_isbn(&self, isbn: &str) -> Option<Book>;

    /// Case-insensitive substring match on title or author, ordered by title.
    fn search_local(&self, query: &str) -> Vec<Book>;

    /// Available books ordered by title.
    fn list_available(&self) -> Vec<Book>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
