//! reading-time - estimate reading time for text on stdin
//!
//! Prints the estimated number of minutes (0 for text without words).
//!
//! ## Example Usage
//!
//! ```bash
//! reading-time < article.txt
//! reading-time --words-per-minute 250 < article.txt
//! ```

use clap::Parser;
use colored::Colorize;
use pocket_tools::constants::{EXIT_FAILURE, WORDS_PER_MINUTE};
use pocket_tools::input::read_all;
use pocket_tools::reading::ReadingTimeEstimator;
use std::io;
use std::process;

/// Estimate reading time in minutes for text read from stdin
#[derive(Parser)]
#[command(name = "reading-time")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate reading time in minutes for text read from stdin", long_about = None)]
struct Cli {
    /// Print tool name, version and word count to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Reading speed
    #[arg(
        short = 'w',
        long,
        default_value_t = WORDS_PER_MINUTE as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    words_per_minute: u32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let text = match read_all(io::stdin().lock()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(EXIT_FAILURE);
        }
    };

    let estimate = ReadingTimeEstimator::new(cli.words_per_minute as usize).estimate(&text);

    if cli.verbose {
        eprintln!(
            "{} v{}: {} words",
            "reading-time".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            estimate.words
        );
    }

    println!("{}", estimate.minutes);
}
