use tracing::debug;

use crate::catalog::seed::sample_books;
use crate::core::book::Book;
use crate::core::types::SearchField;

/// The in-memory book catalog
///
/// Books are kept in insertion order. No operation reorders or deduplicates
/// the collection, and every query returns an owned snapshot so callers can
/// never mutate the catalog behind its back.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a catalog populated with the sample books
    pub fn with_seed() -> Self {
        let mut catalog = Self::new();
        catalog.seed();
        catalog
    }

    /// Append the sample books. Calling this twice adds them twice.
    pub fn seed(&mut self) {
        let samples = sample_books();
        debug!("Seeding catalog with {} sample books", samples.len());
        self.books.extend(samples);
    }

    /// Append a book to the end of the catalog
    pub fn add(&mut self, book: Book) {
        debug!("Adding book: {}", book);
        self.books.push(book);
    }

    /// Remove every book whose title equals `title`, ignoring case.
    /// Returns true if anything was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.books.len();
        self.books.retain(|b| !b.title_equals(title));
        let removed = before - self.books.len();
        debug!("Removed {} book(s) titled '{}'", removed, title);
        removed > 0
    }

    /// Books whose title contains `query`, ignoring case
    pub fn search_by_title(&self, query: &str) -> Vec<Book> {
        self.filter(|b| b.title_contains(query))
    }

    /// Books whose author contains `query`, ignoring case
    pub fn search_by_author(&self, query: &str) -> Vec<Book> {
        self.filter(|b| b.author_contains(query))
    }

    /// Books whose genre equals `query`, ignoring case
    pub fn search_by_genre(&self, query: &str) -> Vec<Book> {
        self.filter(|b| b.genre_equals(query))
    }

    /// Title, author and genre results concatenated in that order.
    ///
    /// A book that satisfies more than one predicate appears once per match.
    pub fn search_any(&self, query: &str) -> Vec<Book> {
        let mut results = self.search_by_title(query);
        results.extend(self.search_by_author(query));
        results.extend(self.search_by_genre(query));
        results
    }

    /// Run a search against the given field
    pub fn search(&self, field: SearchField, query: &str) -> Vec<Book> {
        match field {
            SearchField::Title => self.search_by_title(query),
            SearchField::Author => self.search_by_author(query),
            SearchField::Genre => self.search_by_genre(query),
            SearchField::Any => self.search_any(query),
        }
    }

    /// First book with the same title and author, ignoring case
    pub fn find_duplicate(&self, title: &str, author: &str) -> Option<Book> {
        let author = author.to_lowercase();
        self.books
            .iter()
            .find(|b| b.title_equals(title) && b.author().to_lowercase() == author)
            .cloned()
    }

    /// Snapshot of every book in insertion order
    pub fn all(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Number of books in catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.books.iter().filter(|b| predicate(b)).cloned().collect()
    }
}
