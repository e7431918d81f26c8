//! chat-filter: masks denylisted words in a line read from stdin.

use clap::Parser;
use log::error;
use rust_text_filter::input::{read_all_lines, read_line};
use rust_text_filter::{ChatConfig, ChatFilter, Result};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chat-filter")]
#[command(version)]
#[command(about = "Mask inappropriate words in a chat message", long_about = None)]
struct Cli {
    /// Word list replacing the built-in denylist (one word per line)
    #[arg(short, long)]
    denylist: Option<PathBuf>,

    /// Add the --denylist words to the built-in list instead of replacing it
    #[arg(short, long, requires = "denylist")]
    extend: bool,

    /// Filter every line of stdin instead of only the first
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
    let config = ChatConfig {
        denylist_path: cli.denylist,
        extend_default: cli.extend,
    };
    let filter = ChatFilter::from_config(&config)?;

    let stdin = io::stdin();
    let lines = if cli.all {
        read_all_lines(stdin.lock())?
    } else {
        vec![read_line(&mut stdin.lock())?]
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for message in filter.filter_all(&lines) {
        writeln!(out, "{}", message.render())?;
    }
    out.flush()?;
    Ok(())
}
