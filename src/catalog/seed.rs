use crate::core::book::Book;

/// The sample books loaded at startup, in catalog order
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "Science Fiction", 1965),
        Book::new(
            "One Hundred Years of Solitude",
            "Gabriel García Márquez",
            "Magical Realism, Literary Fiction",
            1967,
        ),
        Book::new(
            "And Then There Were None",
            "Agatha Christie",
            "Mystery",
            1939,
        ),
        // Lowercase genre on purpose: genre search ignores case
        Book::new("Harry Potter", "J.K. Rowling", "mystery", 1997),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_books() {
        let books = sample_books();
        let titles: Vec<_> = books.iter().map(Book::title).collect();
        assert_eq!(
            titles,
            vec![
                "Dune",
                "One Hundred Years of Solitude",
                "And Then There Were None",
                "Harry Potter"
            ]
        );
        assert_eq!(books[3].genre(), "mystery");
    }
}
