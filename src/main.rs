use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hvim_highlight::{SourceFile, TokenMap};
use hvim_lexer::{tokenize, tokens::TokenKind};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "hvim")]
#[command(author, version, about = "Token dump and highlight lookup for C-family sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a source file
    Tokens {
        /// The source file to scan
        input: PathBuf,

        /// Include whitespace tokens
        #[arg(long)]
        all: bool,
    },

    /// Print the kind of the token covering a zero-based row and byte column
    KindAt {
        /// The source file to scan
        input: PathBuf,

        /// Zero-based row
        row: usize,

        /// Zero-based byte column within the row
        col: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the verbose flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Tokens { input, all } => dump_tokens(&input, all),
        Commands::KindAt { input, row, col } => {
            if !kind_at(&input, row, col)? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn load(input: &Path) -> Result<SourceFile> {
    SourceFile::load(input).with_context(|| format!("could not open {}", input.display()))
}

fn dump_tokens(input: &Path, all: bool) -> Result<()> {
    let source = load(input)?;

    let mut count = 0;
    for token in tokenize(source.text()) {
        count += 1;
        if all || token.kind != TokenKind::Whitespace {
            println!("{}: {:?}", token.kind, token.text);
        }
    }
    debug!("{} tokens in {}", count, source.path().display());
    Ok(())
}

fn kind_at(input: &Path, row: usize, col: usize) -> Result<bool> {
    let source = load(input)?;
    let map = TokenMap::new(source.text());

    match map.token_at(row, col) {
        Some(token) => {
            println!("{}: {:?}", token.kind, token.text);
            Ok(true)
        }
        None => {
            info!(
                "no token at {}:{} ({} rows in {})",
                row,
                col,
                map.line_count(),
                source.path().display()
            );
            Ok(false)
        }
    }
}
