//! domlist CLI
//!
//! Converts a plaintext domain list into a JSON rule-set document.

mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use domlist_compiler::{convert_file, ConvertError};

#[derive(Parser)]
#[command(name = "domlist")]
#[command(version)]
#[command(about = "Convert domain list file to JSON format")]
struct Cli {
    /// Path to the input list file
    input_file_path: PathBuf,

    /// Path to the output JSON file
    output_file_path: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli);

    if let Err(e) = cmd_convert(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_convert(cli: &Cli) -> Result<(), ConvertError> {
    let start = Instant::now();
    let stats = convert_file(&cli.input_file_path, &cli.output_file_path)?;

    info!(
        input = %cli.input_file_path.display(),
        output = %cli.output_file_path.display(),
        lines = stats.lines,
        blank = stats.blank_lines,
        domains = stats.domains,
        suffixes = stats.domain_suffixes,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "converted domain list"
    );

    Ok(())
}
