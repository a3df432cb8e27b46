//! Implementation of `verhoeff validate [VALUE]...`.
//!
//! Prints `VALUE<TAB>valid|invalid` for every value. Malformed values
//! (empty, non-digit) are reported as `invalid`, never as errors.
//!
//! Exit codes:
//! - 0 = every value validated
//! - 1 = at least one value failed
//! - 2 = the input could not be read
use verhoeff_core::Operation;

use crate::cmd::batch::{self, Values};
use crate::error::CliError;
use crate::format::FormatterConfig;

/// Runs the `validate` command.
///
/// # Errors
///
/// [`CliError::ChecksumFailed`] when any value fails; [`CliError::IoError`]
/// when output cannot be written.
pub fn run(values: &Values, config: &FormatterConfig) -> Result<(), CliError> {
    let tally = batch::run(Operation::Validate, values, config)?;
    if tally.failed > 0 {
        return Err(CliError::ChecksumFailed {
            count: tally.failed,
        });
    }
    Ok(())
}
