use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Input format options shared by every command that reads integers
#[derive(Args, Debug, Clone, Copy)]
pub struct ValueFormat {
    /// Read/write whitespace-separated decimal integers instead of little-endian u32
    #[arg(short = 't', long)]
    pub text: bool,

    /// Treat values as gaps between neighbours of a sorted list
    #[arg(short = 'd', long)]
    pub delta: bool,
}

/// Arguments for encoding integers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Codec to encode with (defaults to the configured codec)
    #[arg(short = 'c', long)]
    pub codec: Option<String>,

    #[command(flatten)]
    pub format: ValueFormat,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding integers
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Number of values in the stream (streams do not record it)
    #[arg(short = 'n', long)]
    pub count: usize,

    /// Codec the stream was encoded with (defaults to the configured codec)
    #[arg(short = 'c', long)]
    pub codec: Option<String>,

    #[command(flatten)]
    pub format: ValueFormat,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for comparing codecs on one input
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Only measure these codecs (comma-separated)
    #[arg(short = 'c', long, value_delimiter = ',')]
    pub codecs: Vec<String>,

    #[command(flatten)]
    pub format: ValueFormat,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as TOML
    Show,

    /// Print the user settings file location
    Path,
}
