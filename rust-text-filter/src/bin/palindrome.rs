//! palindrome: highlights palindromic words in a line read from stdin.

use clap::Parser;
use log::error;
use rust_text_filter::config::DEFAULT_MARKER;
use rust_text_filter::input::{read_all_lines, read_line};
use rust_text_filter::{PalindromeConfig, PalindromeHighlighter, Result};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "palindrome")]
#[command(version)]
#[command(about = "Highlight palindrome words in a sentence", long_about = None)]
struct Cli {
    /// Marker placed on both sides of each palindrome
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Compare words with their punctuation ("noon." is then not a palindrome)
    #[arg(short, long)]
    keep_punctuation: bool,

    /// Also count sentences that are palindromes as a whole
    #[arg(short, long)]
    sentences: bool,

    /// Process every line of stdin instead of only the first
    #[arg(short, long)]
    all: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let highlighter = PalindromeHighlighter::new(PalindromeConfig {
        marker: cli.marker,
        strip_punctuation: !cli.keep_punctuation,
        sentences: cli.sentences,
    })?;

    let stdin = io::stdin();
    let lines = if cli.all {
        read_all_lines(stdin.lock())?
    } else {
        vec![read_line(&mut stdin.lock())?]
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in highlighter.highlight_all(&lines) {
        writeln!(out, "{}", result.render())?;
    }
    out.flush()?;
    Ok(())
}
