use serde::{Deserialize, Serialize};

use crate::core::book::Book;

/// Which field a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Substring match on title
    Title,
    /// Substring match on author
    Author,
    /// Exact match on genre
    Genre,
    /// Title, author and genre results concatenated
    Any,
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Author => write!(f, "author"),
            Self::Genre => write!(f, "genre"),
            Self::Any => write!(f, "title/author/genre"),
        }
    }
}

/// Column used to order a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Author,
    Genre,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Field used to bucket books in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Genre,
    Author,
}

impl GroupField {
    /// The grouping key for a book, exactly as stored
    pub fn key<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Genre => book.genre(),
            Self::Author => book.author(),
        }
    }
}

impl std::fmt::Display for GroupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Genre => write!(f, "Genre"),
            Self::Author => write!(f, "Author"),
        }
    }
}
