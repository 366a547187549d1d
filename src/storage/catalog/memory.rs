//! In-memory catalog store. State is lost when the process exits.

use crate::domain::book::{Book, IsbnGenerator, RandomIsbnGenerator, UNKNOWN_AUTHOR};
use crate::storage::catalog::{AddOutcome, CatalogStore};
use chrono::Utc;

/// Attempts at drawing an unused identifier before an add is refused.
const MAX_ISBN_ATTEMPTS: usize = 16;

pub struct InMemoryCatalogStore {
    books: Vec<Book>,
    isbn_generator: Box<dyn IsbnGenerator>,
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::with_isbn_generator(Box::new(RandomIsbnGenerator))
    }

    pub fn with_isbn_generator(isbn_generator: Box<dyn IsbnGenerator>) -> Self {
        Self {
            books: Vec::new(),
            isbn_generator,
        }
    }

    fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn == isbn)
    }

    fn unused_isbn(&self) -> Option<String> {
        (0..MAX_ISBN_ATTEMPTS)
            .map(|_| self.isbn_generator.generate())
            .find(|candidate| !self.contains_isbn(candidate))
    }

    /// Case-insensitive title order; ties fall back to byte order so it stays total.
    fn sorted_by_title(mut books: Vec<Book>) -> Vec<Book> {
        books.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        });
        books
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn add(&mut self, mut book: Book) -> AddOutcome {
        if book.isbn.trim().is_empty() {
            match self.unused_isbn() {
                Some(isbn) => book.isbn = isbn,
                None => {
                    tracing::warn!(title = %book.title, "No unused ISBN could be generated, add dropped");
                    return AddOutcome::IsbnUnavailable;
                }
            }
        } else if let Some(existing) = self.get_by_isbn(&book.isbn) {
            tracing::debug!(isbn = %book.isbn, "Duplicate ISBN, add dropped");
            return AddOutcome::Duplicate(existing);
        }

        if book.author.trim().is_empty() {
            book.author = UNKNOWN_AUTHOR.to_string();
        }
        book.date_added = Utc::now();
        book.is_available = true;

        tracing::info!(isbn = %book.isbn, title = %book.title, "Book added to catalog");
        self.books.push(book.clone());
        AddOutcome::Inserted(book)
    }

    fn remove(&mut self, isbn: &str) -> bool {
        match self.books.iter().position(|b| b.isbn == isbn) {
            Some(idx) => {
                let removed = self.books.remove(idx);
                tracing::info!(isbn = %removed.isbn, title = %removed.title, "Book removed from catalog");
                true
            }
            None => false,
        }
    }

    fn get_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.iter().find(|b| b.isbn == isbn).cloned()
    }

    fn search_local(&self, query: &str) -> Vec<Book> {
        let needle = query.to_lowercase();
        let matches = self
            .books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Self::sorted_by_title(matches)
    }

    fn list_available(&self) -> Vec<Book> {
        let available = self.books.iter().filter(|b| b.is_available).cloned().collect();
        Self::sorted_by_title(available)
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
