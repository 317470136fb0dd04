use std::io::Write;

use crate::cli::OutputFormat;
use crate::core::book::Book;

/// Longest title/author/genre shown in a text table before truncation
const MAX_TEXT_COLUMN: usize = 40;

/// Write a list of books in the requested format
pub fn write_books<W: Write>(
    out: &mut W,
    books: &[Book],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_table(out, books)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(books)?)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "title\tauthor\tgenre\tyear")?;
            for b in books {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    b.title(),
                    b.author(),
                    b.genre(),
                    b.year()
                )?;
            }
        }
    }
    Ok(())
}

/// Aligned text table with column widths sized to the content
pub fn write_table<W: Write>(out: &mut W, books: &[Book]) -> std::io::Result<()> {
    let title_width = column_width(books, Book::title, "Title");
    let author_width = column_width(books, Book::author, "Author");
    let genre_width = column_width(books, Book::genre, "Genre");
    let total_width = title_width + author_width + genre_width + 3 + 6;

    writeln!(
        out,
        "{:<title_w$} {:<author_w$} {:<genre_w$} {:>6}",
        "Title",
        "Author",
        "Genre",
        "Year",
        title_w = title_width,
        author_w = author_width,
        genre_w = genre_width
    )?;
    writeln!(out, "{}", "-".repeat(total_width))?;

    for b in books {
        writeln!(
            out,
            "{:<title_w$} {:<author_w$} {:<genre_w$} {:>6}",
            truncate(b.title(), title_width),
            truncate(b.author(), author_width),
            truncate(b.genre(), genre_width),
            b.year(),
            title_w = title_width,
            author_w = author_width,
            genre_w = genre_width
        )?;
    }
    Ok(())
}

fn column_width(books: &[Book], field: fn(&Book) -> &str, header: &str) -> usize {
    books
        .iter()
        .map(|b| field(b).chars().count().min(MAX_TEXT_COLUMN))
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Shorten to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
