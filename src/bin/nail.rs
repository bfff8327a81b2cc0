mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{cmd_convert, cmd_read, cmd_validate, cmd_write};

#[derive(Parser)]
#[command(name = "nail")]
#[command(
    about = "Read, write and check NAIL pin position files",
    long_about = "nail - Reader and writer for NAIL pin position files\n\n\
    NAIL files hold an ordered list of 2D nail positions as 16-bit fixed-point\n\
    coordinates behind a 4-byte 'NAIL' identifier.\n\n\
    Examples:\n\
      nail read pins.nail\n\
      nail read pins.nail --json\n\
      nail write points.json -o pins.nail\n\
      nail convert pins.nail\n\
      nail validate pins.nail --level strict"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a NAIL file and print its nail positions
    Read {
        /// Path to the NAIL file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Reject files whose length is not a whole number of coordinate pairs
        #[arg(long)]
        strict: bool,

        /// Also print the raw fixed-point integers
        #[arg(long)]
        raw: bool,
    },

    /// Write a NAIL file from a JSON array of {"x": .., "y": ..} points
    Write {
        /// JSON file with the points, or "-" for stdin
        #[arg(value_name = "JSON")]
        input: PathBuf,

        /// Output NAIL file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Read a NAIL file and write it back out re-encoded
    Convert {
        /// Path to the NAIL file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (default: <FILE>_custom)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Validate a NAIL file without decoding it
    Validate {
        /// Path to the NAIL file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Validation level: standard or strict
        #[arg(short, long, default_value = "standard")]
        level: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Read {
            input,
            json,
            strict,
            raw,
        } => cmd_read(input, json, strict, raw),
        Commands::Write { input, output } => cmd_write(input, output),
        Commands::Convert { input, output } => cmd_convert(input, output),
        Commands::Validate { input, level, json } => cmd_validate(input, level, json),
    }
}
