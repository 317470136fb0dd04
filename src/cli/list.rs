use std::io::Write;

use clap::Args;

use crate::catalog::report::sort_books;
use crate::catalog::store::BookCatalog;
use crate::cli::output::write_books;
use crate::cli::{OutputFormat, SortKeyArg};
use crate::core::types::SortDirection;

#[derive(Args)]
pub struct ListArgs {
    /// Sort by column instead of catalog order
    #[arg(long, value_enum)]
    pub sort_by: Option<SortKeyArg>,

    /// Sort in descending order (requires --sort-by)
    #[arg(long, requires = "sort_by")]
    pub desc: bool,
}

pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = BookCatalog::with_seed();

    if verbose {
        eprintln!("Loaded catalog with {} books", catalog.len());
    }

    let mut books = catalog.all();
    if let Some(key) = args.sort_by {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        books = sort_books(&books, key.into(), direction);
    }

    let mut out = std::io::stdout().lock();
    if format == OutputFormat::Text {
        if books.is_empty() {
            writeln!(out, "No books in catalog.")?;
            return Ok(());
        }
        writeln!(out, "Book Catalog ({} books)\n", books.len())?;
    }
    write_books(&mut out, &books, format)
}
