//! Word Suggester - CLI
//!
//! Wildcard word lookup with an interactive line mode and one-shot commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use word_suggester::{
    commands::{collect_stats, run_batch, run_interactive, run_length, run_query},
    dictionary::Diagnostic,
    matcher::{LengthRule, Suggester},
    output::{print_batch_result, print_length_result, print_query_result, print_stats},
    wordlists::{EMBEDDED, loader},
};

#[derive(Parser)]
#[command(
    name = "word_suggester",
    about = "Find dictionary words matching letter patterns like C*T",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: bundled word list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Match words at least as long as the pattern instead of exactly as long
    #[arg(short = 'a', long, global = true)]
    at_least: bool,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read patterns from stdin, one per line (default)
    Interactive,

    /// Match a single pattern, e.g. "c*t" or "**ing"
    Query {
        /// Letters and '*' wildcards
        pattern: String,

        /// Show at most this many matches
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List words by length
    Length {
        /// Minimum length
        min: usize,

        /// Maximum length (default: no upper bound)
        max: Option<usize>,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show dictionary statistics
    Stats,

    /// Match every pattern in a file, one per line, in parallel
    Batch {
        /// File of patterns
        file: PathBuf,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (suggester, diagnostics) = load_suggester(cli.dictionary.as_deref())?;
    let rule = if cli.at_least {
        LengthRule::AtLeast
    } else {
        LengthRule::Exact
    };

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive_command(&suggester, rule),
        Commands::Query { pattern, limit } => {
            let result = run_query(&suggester, &pattern, rule)?;
            print_query_result(&result, limit);
            Ok(())
        }
        Commands::Length { min, max, limit } => {
            let result = run_length(&suggester, min, max);
            print_length_result(&result, limit);
            Ok(())
        }
        Commands::Stats => {
            print_stats(&collect_stats(&suggester, &diagnostics));
            Ok(())
        }
        Commands::Batch { file, no_progress } => {
            run_batch_command(&suggester, &file, rule, !no_progress)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Build the suggester from a dictionary file, or the bundled list
fn load_suggester(path: Option<&Path>) -> Result<(Suggester, Vec<Diagnostic>)> {
    match path {
        Some(path) => {
            let words = loader::load_from_file(path)
                .with_context(|| format!("Couldn't open dictionary at {}", path.display()))?;
            log::debug!("Read {} entries from {}", words.len(), path.display());
            Ok(Suggester::new(words))
        }
        None => Ok(Suggester::new(EMBEDDED)),
    }
}

fn run_interactive_command(suggester: &Suggester, rule: LengthRule) -> Result<()> {
    println!(
        "# Initialized word suggester with {} words!",
        suggester.word_count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = run_interactive(suggester, stdin.lock(), stdout.lock(), rule)
        .context("Interactive session failed")?;

    log::info!("Answered {answered} patterns");
    Ok(())
}

fn run_batch_command(
    suggester: &Suggester,
    file: &Path,
    rule: LengthRule,
    show_progress: bool,
) -> Result<()> {
    let patterns = loader::load_from_file(file)
        .with_context(|| format!("Couldn't open pattern file at {}", file.display()))?;

    let result = run_batch(suggester, &patterns, rule, show_progress);
    print_batch_result(&result);
    Ok(())
}
