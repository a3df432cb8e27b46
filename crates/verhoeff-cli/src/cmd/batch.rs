//! Shared driver: resolve the value source, apply one engine operation to
//! every value, stream outcomes, and tally failures.
use std::io::Write;
use std::time::Instant;

use verhoeff_core::Operation;

use crate::cli::{PathOrStdin, ValueSource};
use crate::error::CliError;
use crate::format::{FormatterConfig, write_info, write_outcome, write_summary, write_timing};
use crate::io::{read_input, split_values};

/// Counts produced by one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Values processed.
    pub checked: usize,
    /// Values rejected or failing validation.
    pub failed: usize,
}

/// Values to process, with a label for where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values {
    /// The values, in input order.
    pub items: Vec<String>,
    /// `"arguments"`, `"-"` for stdin, or the input path.
    pub source: String,
}

/// Resolves positional values, `--input`, or stdin into a list of values.
///
/// # Errors
///
/// Returns an input-failure [`CliError`] if reading fails or no value is
/// found.
pub fn resolve_values(source: &ValueSource, max_file_size: u64) -> Result<Values, CliError> {
    let from = match (&source.input, source.values.is_empty()) {
        (Some(input), _) => input.clone(),
        (None, false) => {
            return Ok(Values {
                items: source.values.clone(),
                source: "arguments".to_owned(),
            });
        }
        (None, true) => PathOrStdin::Stdin,
    };
    let items = split_values(&read_input(&from, max_file_size)?);
    if items.is_empty() {
        return Err(CliError::NoValues {
            source: from.to_string(),
        });
    }
    Ok(Values {
        items,
        source: from.to_string(),
    })
}

/// Applies `op` to every value, writing outcomes to `out`/`err`.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if writing to either stream fails.
pub fn run_with<O: Write, E: Write>(
    op: Operation,
    values: &Values,
    config: &FormatterConfig,
    out: &mut O,
    err: &mut E,
) -> Result<Tally, CliError> {
    let started = Instant::now();
    let mut tally = Tally::default();

    write_info(
        err,
        &format!(
            "verhoeff-core {}: {op:?} over {} values from {}",
            verhoeff_core::version(),
            values.items.len(),
            values.source
        ),
        config,
    )
    .map_err(|e| stream_error("stderr", &e))?;

    for value in &values.items {
        let outcome = op.apply(value);
        tally.checked += 1;
        if !outcome.is_success() {
            tally.failed += 1;
        }
        write_outcome(out, err, &outcome, config).map_err(|e| stream_error("stdout", &e))?;
    }
    out.flush().map_err(|e| stream_error("stdout", &e))?;

    write_timing(err, "processed", started.elapsed(), config)
        .map_err(|e| stream_error("stderr", &e))?;
    write_summary(err, tally.checked, tally.failed, config)
        .map_err(|e| stream_error("stderr", &e))?;
    Ok(tally)
}

/// Runs `op` against the process's stdout and stderr.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(op: Operation, values: &Values, config: &FormatterConfig) -> Result<Tally, CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with(op, values, config, &mut stdout.lock(), &mut stderr.lock())
}

fn stream_error(stream: &str, e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
