//! Word Duel - CLI
//!
//! Reads word pairs and reports which word wins each duel.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;
use word_duel::{
    commands::{DuelConfig, analyze_word, duel, rank_words, run_batch, run_duels},
    input::{
        WordPair,
        loader::{load_pairs_from_file, load_words_from_file},
    },
    output::{print_analysis_result, print_batch_result, print_duel_report, print_standings},
};

#[derive(Parser)]
#[command(
    name = "word_duel",
    about = "Rank word pairs by category: quintessential, palindrome, ordered, trio, duo, standard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter used when RUST_LOG is unset (e.g. warn, info, `word_duel=debug`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read word pairs from stdin (or a file) and report every duel (default)
    Duel {
        /// Read pairs from this file instead of stdin
        #[arg(short, long)]
        file: Option<String>,

        /// Classic Black/White transcript without colour
        #[arg(short, long)]
        plain: bool,

        /// Fail if the input ends on an unpaired word
        #[arg(long)]
        strict: bool,
    },

    /// Classify a single word
    Classify {
        /// Word to classify
        word: String,
    },

    /// Decide a single duel
    Compare {
        /// First word (Black)
        first: String,
        /// Second word (White)
        second: String,
    },

    /// Resolve every pair in a file in parallel and summarize
    Batch {
        /// File of whitespace-delimited word pairs
        path: String,

        /// Fail if the file ends on an unpaired word
        #[arg(long)]
        strict: bool,

        /// Also print every duel
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank every word in a file, strongest first
    Rank {
        /// File of whitespace-delimited words
        path: String,
    },
}

fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter '{default_filter}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    // Default to reading duels from stdin if no command given
    let command = cli.command.unwrap_or(Commands::Duel {
        file: None,
        plain: false,
        strict: false,
    });

    match command {
        Commands::Duel {
            file,
            plain,
            strict,
        } => run_duel_command(file.as_deref(), DuelConfig::new(plain, strict)),
        Commands::Classify { word } => {
            print_analysis_result(&analyze_word(&word));
            Ok(())
        }
        Commands::Compare { first, second } => {
            print_duel_report(&duel(&WordPair::new(first, second)));
            Ok(())
        }
        Commands::Batch {
            path,
            strict,
            verbose,
        } => run_batch_command(&path, strict, verbose),
        Commands::Rank { path } => run_rank_command(&path),
    }
}

fn run_duel_command(file: Option<&str>, config: DuelConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = if let Some(path) = file {
        let reader = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
        run_duels(BufReader::new(reader), &mut out, config)?
    } else {
        run_duels(io::stdin().lock(), &mut out, config)?
    };

    if summary.duels == 0 {
        tracing::warn!("no word pairs found in input");
    }
    Ok(())
}

fn run_batch_command(path: &str, strict: bool, verbose: bool) -> Result<()> {
    let pairs = load_pairs_from_file(path, strict)
        .with_context(|| format!("failed to load pairs from '{path}'"))?;
    println!("Resolving {} duels from {path}...", pairs.len());

    let result = run_batch(&pairs, true);
    if verbose {
        for report in &result.reports {
            print_duel_report(report);
        }
    }
    print_batch_result(&result);
    Ok(())
}

fn run_rank_command(path: &str) -> Result<()> {
    let words = load_words_from_file(path)
        .with_context(|| format!("failed to load words from '{path}'"))?;
    print_standings(&rank_words(&words));
    Ok(())
}
