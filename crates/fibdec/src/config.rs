//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibdec_core::{parse_index, FibError};

/// fibdec: exact Fibonacci numbers on a 256-digit decimal kernel.
#[derive(Parser, Debug)]
#[command(name = "fibdec", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(
        short = 'n',
        long = "index",
        default_value = "100",
        env = "FIBDEC_N",
        allow_hyphen_values = true
    )]
    pub index: String,

    /// Algorithm to use: fast, iterative, or all.
    #[arg(long, default_value = "fast", env = "FIBDEC_ALGO")]
    pub algo: String,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (never truncate the value).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show digit count and capacity use.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run the device sweep over offsets 0..=N (N at most 65536).
    #[arg(long, value_name = "N")]
    pub bench: Option<u64>,

    /// Timing report written by `--bench`.
    #[arg(long, default_value = "output.txt", env = "FIBDEC_REPORT")]
    pub report: PathBuf,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The requested index, rejecting negative or malformed text.
    pub fn index(&self) -> Result<u64, FibError> {
        parse_index(&self.index)
    }
}
