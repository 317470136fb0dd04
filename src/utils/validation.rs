//! Turning raw form input into catalog records.
//!
//! The catalog itself accepts any [`Book`]. The only input that can be
//! rejected is the publication year, which must parse as an integer. No range
//! checks are applied to it, and the text fields are taken as entered.

use crate::core::book::Book;

/// Form validation error types
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid publication year: '{0}' is not a whole number")]
    InvalidYear(String),
}

/// Parse a publication year typed by a user.
///
/// Surrounding whitespace is ignored. Negative years are accepted.
///
/// # Examples
///
/// ```
/// use book_catalog::utils::validation::parse_year;
///
/// assert_eq!(parse_year("1965"), Ok(1965));
/// assert_eq!(parse_year(" 1997\n"), Ok(1997));
/// assert!(parse_year("nineteen").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidYear` if the text is not an integer that
/// fits in an `i32`.
pub fn parse_year(input: &str) -> Result<i32, ValidationError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidYear(input.trim().to_string()))
}

/// The raw text of an "add book" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: String,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year: year.into(),
        }
    }

    /// Build a [`Book`] from the form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidYear` if the year field does not parse.
    pub fn into_book(self) -> Result<Book, ValidationError> {
        let year = parse_year(&self.year)?;
        Ok(Book::new(self.title, self.author, self.genre, year))
    }
}
