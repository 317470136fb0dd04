//! Core data types for the book catalog.
//!
//! - [`Book`]: an immutable record of title, author, genre and publication year
//! - [`SearchField`], [`SortKey`], [`SortDirection`], [`GroupField`]: query and
//!   report parameters
//!
//! ## Matching
//!
//! All comparisons ignore case, but not all of them are substring matches:
//!
//! | Field  | Search semantics |
//! |--------|------------------|
//! | title  | substring        |
//! | author | substring        |
//! | genre  | exact            |
//!
//! Removal compares titles exactly (ignoring case).
//!
//! [`Book`]: book::Book
//! [`SearchField`]: types::SearchField
//! [`SortKey`]: types::SortKey
//! [`SortDirection`]: types::SortDirection
//! [`GroupField`]: types::GroupField

pub mod book;
pub mod types;
