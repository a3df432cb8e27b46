use std::process;

use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin, ValueSource};

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        // Per-value diagnostics and the summary are already on stderr.
        if !(cli.quiet && e.exit_code() == 1) {
            eprintln!("{}", e.message());
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = match cli.format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let config = FormatterConfig::from_flags(mode, cli.no_color, cli.quiet, cli.verbose);

    let values = |source: &ValueSource| cmd::batch::resolve_values(source, cli.max_file_size);
    match &cli.command {
        Command::Compute { source } => cmd::compute::run(&values(source)?, &config),
        Command::Append { source } => cmd::append::run(&values(source)?, &config),
        Command::Validate { source } => cmd::validate::run(&values(source)?, &config),
    }
}
