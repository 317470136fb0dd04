use serde::{Deserialize, Serialize};

/// A single book in the catalog
///
/// Books are immutable once built: fields are exposed through accessors and
/// there is no update operation. The title is the only lookup key and is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    genre: String,
    /// Publication year (no range checks)
    year: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Case-insensitive exact comparison against the title
    pub fn title_equals(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring match on the title.
    /// An empty query matches every book.
    pub fn title_contains(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
    }

    /// Case-insensitive substring match on the author
    pub fn author_contains(&self, query: &str) -> bool {
        contains_ignore_case(&self.author, query)
    }

    /// Case-insensitive exact match on the genre.
    ///
    /// Unlike title and author this is not a substring match: "mystery"
    /// matches "Mystery" but not "Cozy Mystery".
    pub fn genre_equals(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} ({}, {})",
            self.title, self.author, self.genre, self.year
        )
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
