//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unarc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "unarc_core=trace")
    #[arg(long, global = true, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract an archive into a folder next to it
    Extract(ExtractArgs),
    /// Check whether files are supported archives
    Check(CheckArgs),
    /// List the commands offered for a file
    Actions(ActionsArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Operation name used in JSON envelopes.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Extract(_) => "extract",
            Self::Check(_) => "check",
            Self::Actions(_) => "actions",
            Self::Completion { .. } => "completion",
        }
    }
}

/// How to resolve entries whose output path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverwriteMode {
    /// Prompt for each conflict: yes, no or replace all
    Ask,
    /// Keep every existing file
    Skip,
    /// Replace every existing file
    All,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file (.zip, .zipx or .7z)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Conflict handling for paths that already exist
    #[arg(long, value_enum, default_value_t = OverwriteMode::Ask)]
    pub overwrite: OverwriteMode,

    /// Delete the archive after a successful extraction
    #[arg(short = 'd', long, conflicts_with = "keep_source")]
    pub delete_source: bool,

    /// Keep the archive without asking
    #[arg(short = 'k', long)]
    pub keep_source: bool,

    /// Maximum number of files to extract
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Maximum total extracted size (suffixes: K, M, G, T)
    #[arg(long, value_parser = parse_byte_size)]
    pub max_total_size: Option<u64>,

    /// Maximum single file size (suffixes: K, M, G, T)
    #[arg(long, value_parser = parse_byte_size)]
    pub max_file_size: Option<u64>,

    /// Maximum number of components in an entry path
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_depth: Option<u16>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct ActionsArgs {
    /// File to list commands for
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
