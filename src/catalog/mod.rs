//! Book catalog storage and reporting.
//!
//! The catalog is a plain in-memory collection. Nothing is written to disk:
//! every process starts from an empty catalog or from the sample books.
//!
//! ## Sample Books
//!
//! | Title                          | Author                 | Genre                             | Year |
//! |--------------------------------|------------------------|-----------------------------------|------|
//! | Dune                           | Frank Herbert          | Science Fiction                   | 1965 |
//! | One Hundred Years of Solitude  | Gabriel García Márquez | Magical Realism, Literary Fiction | 1967 |
//! | And Then There Were None       | Agatha Christie        | Mystery                           | 1939 |
//! | Harry Potter                   | J.K. Rowling           | mystery                           | 1997 |
//!
//! ## Example
//!
//! ```rust
//! use book_catalog::{Book, BookCatalog};
//!
//! let mut catalog = BookCatalog::with_seed();
//! catalog.add(Book::new("Foo", "Bar", "SciFi", 2020));
//!
//! // Title and author are substring searches
//! assert_eq!(catalog.search_by_author("bar").len(), 1);
//!
//! // Genre is an exact (case-insensitive) match
//! assert_eq!(catalog.search_by_genre("mystery").len(), 2);
//!
//! assert!(catalog.remove("dune"));
//! assert_eq!(catalog.len(), 4);
//! ```

pub mod report;
pub mod seed;
pub mod store;
