//! Command-line interface for book-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: Print every book in the sample catalog
//! - **search**: Search the sample catalog by title, author or genre
//! - **report**: Summarize the sample catalog, grouped by genre or author
//! - **shell**: Interactive session to add, remove and search books
//!
//! Nothing is saved between runs. One-shot commands operate on the sample
//! books; changes made in `shell` last until the session ends.
//!
//! ## Usage
//!
//! ```text
//! # Sorted listing
//! book-catalog list --sort-by year --desc
//!
//! # Title/author substring or exact genre match
//! book-catalog search mystery
//! book-catalog search herbert --by author --format json
//!
//! # Grouped report
//! book-catalog report --group-by author
//!
//! # Interactive session
//! book-catalog shell
//! ```

use clap::{Parser, Subcommand};

use crate::core::types::{GroupField, SearchField, SortKey};

pub mod list;
pub mod output;
pub mod report;
pub mod search;
pub mod shell;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Keep an in-memory catalog of books and search it")]
#[command(
    long_about = "book-catalog keeps a small in-memory list of books.\n\nTitles and authors are searched by substring, genres by exact match, all ignoring case. Use the shell command to add and remove books interactively; nothing is written to disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all books in the catalog
    List(list::ListArgs),

    /// Search books by title, author or genre
    Search(search::SearchArgs),

    /// Summarize the catalog grouped by genre or author
    Report(report::ReportArgs),

    /// Start an interactive session
    Shell(shell::ShellArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Search field argument for CLI
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SearchFieldArg {
    Title,
    Author,
    Genre,
    Any,
}

impl From<SearchFieldArg> for SearchField {
    fn from(arg: SearchFieldArg) -> Self {
        match arg {
            SearchFieldArg::Title => SearchField::Title,
            SearchFieldArg::Author => SearchField::Author,
            SearchFieldArg::Genre => SearchField::Genre,
            SearchFieldArg::Any => SearchField::Any,
        }
    }
}

/// Sort key argument for CLI
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SortKeyArg {
    Title,
    Author,
    Genre,
    Year,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Title => SortKey::Title,
            SortKeyArg::Author => SortKey::Author,
            SortKeyArg::Genre => SortKey::Genre,
            SortKeyArg::Year => SortKey::Year,
        }
    }
}

/// Grouping argument for CLI
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GroupFieldArg {
    Genre,
    Author,
}

impl From<GroupFieldArg> for GroupField {
    fn from(arg: GroupFieldArg) -> Self {
        match arg {
            GroupFieldArg::Genre => GroupField::Genre,
            GroupFieldArg::Author => GroupField::Author,
        }
    }
}
