use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::core::book::Book;
use crate::core::types::{GroupField, SortDirection, SortKey};

/// Aggregate figures over a set of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub genre_count: usize,
    pub author_count: usize,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
}

impl CatalogSummary {
    pub fn from_books(books: &[Book]) -> Self {
        let genres: BTreeSet<_> = books.iter().map(Book::genre).collect();
        let authors: BTreeSet<_> = books.iter().map(Book::author).collect();

        Self {
            total_books: books.len(),
            genre_count: genres.len(),
            author_count: authors.len(),
            earliest_year: books.iter().map(Book::year).min(),
            latest_year: books.iter().map(Book::year).max(),
        }
    }
}

/// Return a sorted copy of `books`.
///
/// Text columns compare case-insensitively. The sort is stable so books that
/// compare equal keep their catalog order, in either direction.
pub fn sort_books(books: &[Book], key: SortKey, direction: SortDirection) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
            SortKey::Author => a.author().to_lowercase().cmp(&b.author().to_lowercase()),
            SortKey::Genre => a.genre().to_lowercase().cmp(&b.genre().to_lowercase()),
            SortKey::Year => a.year().cmp(&b.year()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Bucket books by genre or author.
///
/// Keys are used exactly as stored, so "Mystery" and "mystery" are separate
/// groups. Within a group books keep their input order.
pub fn group_books(books: &[Book], field: GroupField) -> BTreeMap<String, Vec<Book>> {
    let mut groups: BTreeMap<String, Vec<Book>> = BTreeMap::new();
    for book in books {
        groups
            .entry(field.key(book).to_string())
            .or_default()
            .push(book.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::sample_books;

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(Book::title).collect()
    }

    #[test]
    fn test_summary() {
        let summary = CatalogSummary::from_books(&sample_books());
        assert_eq!(summary.total_books, 4);
        // "Mystery" and "mystery" count separately
        assert_eq!(summary.genre_count, 4);
        assert_eq!(summary.author_count, 4);
        assert_eq!(summary.earliest_year, Some(1939));
        assert_eq!(summary.latest_year, Some(1997));
    }

    #[test]
    fn test_summary_empty() {
        let summary = CatalogSummary::from_books(&[]);
        assert_eq!(summary.total_books, 0);
        assert_eq!(summary.earliest_year, None);
        assert_eq!(summary.latest_year, None);
    }

    #[test]
    fn test_sort_by_year() {
        let books = sample_books();
        let asc = sort_books(&books, SortKey::Year, SortDirection::Ascending);
        assert_eq!(
            titles(&asc),
            vec![
                "And Then There Were None",
                "Dune",
                "One Hundred Years of Solitude",
                "Harry Potter"
            ]
        );

        let desc = sort_books(&books, SortKey::Year, SortDirection::Descending);
        assert_eq!(desc[0].title(), "Harry Potter");
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let books = vec![
            Book::new("banana", "x", "g", 1),
            Book::new("Apple", "x", "g", 2),
            Book::new("cherry", "x", "g", 3),
        ];
        let sorted = sort_books(&books, SortKey::Title, SortDirection::Ascending);
        assert_eq!(titles(&sorted), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let books = vec![
            Book::new("First", "x", "Mystery", 1),
            Book::new("Second", "x", "mystery", 2),
            Book::new("Third", "x", "Drama", 3),
        ];
        let sorted = sort_books(&books, SortKey::Genre, SortDirection::Ascending);
        assert_eq!(titles(&sorted), vec!["Third", "First", "Second"]);

        let sorted = sort_books(&books, SortKey::Genre, SortDirection::Descending);
        assert_eq!(titles(&sorted), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_group_by_genre() {
        let mut books = sample_books();
        books.push(Book::new("Murder on the Orient Express", "Agatha Christie", "Mystery", 1934));

        let groups = group_books(&books, GroupField::Genre);
        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Magical Realism, Literary Fiction",
                "Mystery",
                "Science Fiction",
                "mystery"
            ]
        );
        assert_eq!(
            titles(&groups["Mystery"]),
            vec!["And Then There Were None", "Murder on the Orient Express"]
        );
    }

    #[test]
    fn test_group_by_author() {
        let groups = group_books(&sample_books(), GroupField::Author);
        assert_eq!(groups.len(), 4);
        assert_eq!(titles(&groups["J.K. Rowling"]), vec!["Harry Potter"]);
    }
}
