use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Generates actor machine identifiers.
#[derive(Debug, Parser)]
#[command(name = "actorid", version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Identity source, overriding the config file (`auto`, `windows`,
    /// `linux`, `macos`).
    #[arg(long)]
    pub platform: Option<String>,

    /// JSON file with browser properties; identifies by browser fingerprint
    /// instead of the OS.
    #[arg(long, conflicts_with = "platform")]
    pub browser_env: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep segments in random-machine-unique order instead of shuffling.
    #[arg(long, default_value_t = false)]
    pub canonical: bool,

    /// Print only the reproducible 6-character machine segment.
    #[arg(long, default_value_t = false)]
    pub machine_segment: bool,

    /// Configuration file to use instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
