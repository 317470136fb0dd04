use std::io::Write;

use clap::Args;

use crate::catalog::report::{group_books, CatalogSummary};
use crate::catalog::store::BookCatalog;
use crate::cli::{GroupFieldArg, OutputFormat};
use crate::core::book::Book;
use crate::core::types::GroupField;

#[derive(Args)]
pub struct ReportArgs {
    /// Field to group books by
    #[arg(long, value_enum, default_value = "genre")]
    pub group_by: GroupFieldArg,
}

pub fn run(args: ReportArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = BookCatalog::with_seed();

    if verbose {
        eprintln!("Loaded catalog with {} books", catalog.len());
    }

    let mut out = std::io::stdout().lock();
    write_report(&mut out, &catalog.all(), args.group_by.into(), format)
}

/// Write the summary and grouped listing for `books`
pub fn write_report<W: Write>(
    out: &mut W,
    books: &[Book],
    field: GroupField,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text_report(out, books, field)?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "group_by": field.to_string().to_lowercase(),
                "summary": CatalogSummary::from_books(books),
                "groups": group_books(books, field),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "group\ttitle\tauthor\tgenre\tyear")?;
            for (key, group) in &group_books(books, field) {
                for b in group {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}\t{}",
                        key,
                        b.title(),
                        b.author(),
                        b.genre(),
                        b.year()
                    )?;
                }
            }
        }
    }

    Ok(())
}

/// Human-readable report: summary figures, then one block per group
pub fn write_text_report<W: Write>(
    out: &mut W,
    books: &[Book],
    field: GroupField,
) -> std::io::Result<()> {
    let summary = CatalogSummary::from_books(books);
    let groups = group_books(books, field);

    writeln!(out, "Catalog Report\n")?;
    writeln!(out, "Books:   {}", summary.total_books)?;
    writeln!(out, "Genres:  {}", summary.genre_count)?;
    writeln!(out, "Authors: {}", summary.author_count)?;
    if let (Some(earliest), Some(latest)) = (summary.earliest_year, summary.latest_year) {
        writeln!(out, "Years:   {earliest}-{latest}")?;
    }

    writeln!(out, "\nBooks by {field}")?;
    writeln!(out, "{}", "-".repeat(40))?;
    if groups.is_empty() {
        writeln!(out, "No books in catalog.")?;
        return Ok(());
    }

    for (key, group) in &groups {
        let noun = if group.len() == 1 { "book" } else { "books" };
        writeln!(out, "{key} ({} {noun})", group.len())?;
        for b in group {
            // Show whichever of author/genre is not the group key
            let detail = match field {
                GroupField::Genre => b.author(),
                GroupField::Author => b.genre(),
            };
            writeln!(out, "  - {}, {} ({})", b.title(), detail, b.year())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::sample_books;

    fn render(books: &[Book], field: GroupField, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, books, field, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report_by_genre() {
        let text = render(&sample_books(), GroupField::Genre, OutputFormat::Text);
        assert!(text.contains("Books:   4"));
        assert!(text.contains("Years:   1939-1997"));
        assert!(text.contains("Books by Genre"));
        assert!(text.contains("Mystery (1 book)"));
        assert!(text.contains("  - Harry Potter, J.K. Rowling (1997)"));
    }

    #[test]
    fn test_text_report_by_author() {
        let text = render(&sample_books(), GroupField::Author, OutputFormat::Text);
        assert!(text.contains("Books by Author"));
        assert!(text.contains("Frank Herbert (1 book)"));
        assert!(text.contains("  - Dune, Science Fiction (1965)"));
    }

    #[test]
    fn test_text_report_empty() {
        let text = render(&[], GroupField::Genre, OutputFormat::Text);
        assert!(text.contains("Books:   0"));
        assert!(!text.contains("Years:"));
        assert!(text.contains("No books in catalog."));
    }

    #[test]
    fn test_json_report() {
        let text = render(&sample_books(), GroupField::Genre, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["group_by"], "genre");
        assert_eq!(value["summary"]["total_books"], 4);
        assert_eq!(value["groups"]["mystery"][0]["title"], "Harry Potter");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_tsv_report() {
        let text = render(&sample_books(), GroupField::Author, OutputFormat::Tsv);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "group\ttitle\tauthor\tgenre\tyear");
        assert!(lines[1].starts_with("Agatha Christie\tAnd Then There Were None"));
    }
}
