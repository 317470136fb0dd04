use std::io::Write;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::output::write_books;
use crate::cli::{OutputFormat, SearchFieldArg};
use crate::core::types::SearchField;

#[derive(Args)]
pub struct SearchArgs {
    /// Text to search for (an empty string matches every title and author)
    #[arg(required = true)]
    pub query: String,

    /// Field to search. `any` concatenates title, author and genre results
    #[arg(long, value_enum, default_value = "any")]
    pub by: SearchFieldArg,
}

pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = BookCatalog::with_seed();
    let field: SearchField = args.by.into();
    let results = catalog.search(field, &args.query);

    if verbose {
        eprintln!(
            "Searched {} books by {} for '{}': {} result(s)",
            catalog.len(),
            field,
            args.query,
            results.len()
        );
    }

    let mut out = std::io::stdout().lock();
    if format == OutputFormat::Text && results.is_empty() {
        writeln!(out, "No results found!")?;
        return Ok(());
    }
    write_books(&mut out, &results, format)
}
