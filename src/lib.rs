//! # book-catalog
//!
//! A small in-memory catalog of books with add, remove and search operations.
//!
//! The catalog is an ordinary owned value: create it, optionally seed it with
//! the sample books, and hand it to whatever drives it (the bundled CLI
//! shell, or your own code). Nothing is persisted.
//!
//! ## Features
//!
//! - **Insertion order**: books are never reordered or deduplicated
//! - **Case-insensitive search**: substring match on title and author,
//!   exact match on genre
//! - **Bulk removal**: removing a title drops every book with that title
//! - **Snapshots**: queries return owned copies, never views into the catalog
//! - **Reports**: sorting, grouping and summary figures
//!
//! ## Example
//!
//! ```rust
//! use book_catalog::{Book, BookCatalog};
//!
//! let mut catalog = BookCatalog::with_seed();
//!
//! let mysteries = catalog.search_by_genre("MYSTERY");
//! assert_eq!(mysteries.len(), 2);
//!
//! catalog.add(Book::new("Foo", "Bar", "SciFi", 2020));
//! assert!(catalog.remove("foo"));
//! assert!(!catalog.remove("foo"));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, sample books and reports
//! - [`core`]: The `Book` record and query parameter types
//! - [`utils`]: Form validation
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::report::{group_books, sort_books, CatalogSummary};
pub use crate::catalog::store::BookCatalog;
pub use crate::core::book::Book;
pub use crate::core::types::*;
pub use crate::utils::validation::{BookForm, ValidationError};
