//! currency-converter - convert an amount using a JSON rate table
//!
//! Reads `<amount> <from> <to>` on the first line of standard input and a
//! rate table on the following line(s), then prints the converted amount.
//!
//! ## Example Usage
//!
//! ```bash
//! printf '100 USD EUR\n{"USD": 1.0, "EUR": 0.92}\n' | currency-converter
//! # 92
//! ```

use clap::Parser;
use colored::Colorize;
use pocket_tools::constants::EXIT_FAILURE;
use pocket_tools::currency::{self, format_amount};
use pocket_tools::input::read_all;
use std::io;
use std::process;

/// Convert an amount between currencies using rates read from stdin
#[derive(Parser)]
#[command(name = "currency-converter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert an amount between currencies using rates read from stdin", long_about = None)]
struct Cli {
    /// Print tool name and version to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!(
            "{} v{}",
            "currency-converter".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let result = read_all(io::stdin().lock()).and_then(|input| currency::run(&input));

    match result {
        Ok(amount) => println!("{}", format_amount(amount)),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(EXIT_FAILURE);
        }
    }
}
