//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes tab-separated results to stdout and tagged diagnostics to
/// stderr. `Json` writes one JSON object per value to stdout (NDJSON).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Where a subcommand takes its values from.
#[derive(Args, Clone, Debug)]
pub struct ValueSource {
    /// Values to process. When omitted, values are read from stdin, one per line.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Read values from a file (or `-` for stdin), one per line.
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "values")]
    pub input: Option<PathOrStdin>,
}

/// All top-level subcommands exposed by the `verhoeff` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print the check digit for each numeric value.
    Compute {
        #[command(flatten)]
        source: ValueSource,
    },

    /// Print each numeric value with its check digit appended.
    Append {
        #[command(flatten)]
        source: ValueSource,
    },

    /// Check values whose last digit is a Verhoeff check digit.
    Validate {
        #[command(flatten)]
        source: ValueSource,
    },
}

/// Root CLI struct for the `verhoeff` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "verhoeff",
    version,
    about = "Verhoeff check-digit tool",
    long_about = "Computes, appends and validates Verhoeff check digits.\n\
                  Values come from the command line, a file, or stdin (one per line)."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: input source, value counts, timing
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `VERHOEFF_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "VERHOEFF_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>: any value other than an explicit false
    /// (`0`, `false`, `no`, `off`, empty) disables color.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}
