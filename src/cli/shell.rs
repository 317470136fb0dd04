//! Interactive catalog session.
//!
//! A menu loop that reads one command per line and walks the user through a
//! short form for each action. The session borrows the catalog mutably for
//! its whole lifetime; input and output are generic so the same loop drives
//! stdin/stdout and in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::Args;
use tracing::debug;

use crate::catalog::store::BookCatalog;
use crate::cli::report::write_text_report;
use crate::core::book::Book;
use crate::core::types::GroupField;
use crate::utils::validation::BookForm;

const MENU: &str = "\
Book Catalog
  1) add      Add a book
  2) remove   Remove books by title
  3) search   Search by title, author or genre
  4) list     View all books
  5) report   Summary grouped by genre or author
     help     Show this menu
     quit     Exit";

#[derive(Args)]
pub struct ShellArgs {
    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    pub empty: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Remove,
    Search,
    List,
    Report,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "add" => Ok(Self::Add),
            "2" | "remove" | "rm" => Ok(Self::Remove),
            "3" | "search" => Ok(Self::Search),
            "4" | "list" | "ls" => Ok(Self::List),
            "5" | "report" => Ok(Self::Report),
            "help" | "?" | "menu" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

pub fn run(args: ShellArgs, verbose: bool) -> anyhow::Result<()> {
    let mut catalog = if args.empty {
        BookCatalog::new()
    } else {
        BookCatalog::with_seed()
    };

    if verbose {
        eprintln!("Starting session with {} books", catalog.len());
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Session::new(&mut catalog, stdin, stdout).run()?;

    if verbose {
        eprintln!("Session ended with {} books", catalog.len());
    }
    Ok(())
}

/// Menu-driven session over a borrowed catalog
pub struct Session<'a, R, W> {
    catalog: &'a mut BookCatalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a mut BookCatalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{MENU}")?;

        loop {
            let Some(line) = self.prompt("\n> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(ShellError::UnknownCommand(cmd)) => {
                    writeln!(self.output, "Unknown command: {cmd}")?;
                    writeln!(self.output, "Type 'help' to see available commands.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            debug!("Shell command: {:?}", command);
            if command == ShellCommand::Quit {
                break;
            }
            if !self.execute(command)? {
                // Input ended in the middle of a form
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run one command. Returns false if input ran out before it finished.
    pub fn execute(&mut self, command: ShellCommand) -> Result<bool, ShellError> {
        match command {
            ShellCommand::Add => self.add_book(),
            ShellCommand::Remove => self.remove_book(),
            ShellCommand::Search => self.search_books(),
            ShellCommand::List => {
                let books = self.catalog.all();
                if books.is_empty() {
                    writeln!(self.output, "No books in catalog.")?;
                } else {
                    self.write_lines(&books)?;
                }
                Ok(true)
            }
            ShellCommand::Report => self.report(),
            ShellCommand::Help => {
                writeln!(self.output, "{MENU}")?;
                Ok(true)
            }
            ShellCommand::Quit => Ok(true),
        }
    }

    fn add_book(&mut self) -> Result<bool, ShellError> {
        let mut fields: [String; 4] = Default::default();
        let labels = ["Title: ", "Author: ", "Genre: ", "Publication Year: "];
        for (slot, label) in fields.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(value) => *slot = value,
                None => return Ok(false),
            }
        }
        let [title, author, genre, year] = fields;

        match BookForm::new(title, author, genre, year).into_book() {
            Ok(book) => {
                if self
                    .catalog
                    .find_duplicate(book.title(), book.author())
                    .is_some()
                {
                    writeln!(
                        self.output,
                        "Note: a book with this title and author is already in the catalog."
                    )?;
                }
                self.catalog.add(book);
                writeln!(self.output, "Book added successfully!")?;
            }
            Err(e) => {
                debug!("Rejected book form: {}", e);
                writeln!(self.output, "Invalid input!")?;
            }
        }
        Ok(true)
    }

    fn remove_book(&mut self) -> Result<bool, ShellError> {
        let Some(title) = self.prompt("Enter Title to Remove: ")? else {
            return Ok(false);
        };

        if self.catalog.remove(&title) {
            writeln!(self.output, "Book removed")?;
        } else {
            writeln!(self.output, "Book not found")?;
        }
        Ok(true)
    }

    fn search_books(&mut self) -> Result<bool, ShellError> {
        let Some(query) = self.prompt("Search by Title/Author/Genre: ")? else {
            return Ok(false);
        };

        let results = self.catalog.search_any(&query);
        if results.is_empty() {
            writeln!(self.output, "No results found!")?;
        } else {
            self.write_lines(&results)?;
        }
        Ok(true)
    }

    fn report(&mut self) -> Result<bool, ShellError> {
        let Some(choice) = self.prompt("Group by (genre/author) [genre]: ")? else {
            return Ok(false);
        };

        let field = match choice.trim().to_lowercase().as_str() {
            "" | "genre" => GroupField::Genre,
            "author" => GroupField::Author,
            other => {
                debug!("Unknown report grouping: {}", other);
                writeln!(self.output, "Invalid input!")?;
                return Ok(true);
            }
        };

        write_text_report(&mut self.output, &self.catalog.all(), field)?;
        Ok(true)
    }

    fn write_lines(&mut self, books: &[Book]) -> std::io::Result<()> {
        for book in books {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    /// Returns None at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
