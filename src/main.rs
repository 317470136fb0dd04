use book_catalog::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("book_catalog=debug,info")
    } else {
        EnvFilter::new("book_catalog=warn")
    };

    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::List(args) => {
            cli::list::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Report(args) => {
            cli::report::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Shell(args) => {
            cli::shell::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
