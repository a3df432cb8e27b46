//! Implementation of `verhoeff compute [VALUE]...`.
//!
//! Prints `VALUE<TAB>CHECK_DIGIT` for every value.
//!
//! Exit codes:
//! - 0 = every value was all digits
//! - 1 = at least one value was rejected (empty or non-digit)
//! - 2 = the input could not be read
use verhoeff_core::Operation;

use crate::cmd::batch::{self, Values};
use crate::error::CliError;
use crate::format::FormatterConfig;

/// Runs the `compute` command.
///
/// # Errors
///
/// [`CliError::Rejected`] when any value is rejected; [`CliError::IoError`]
/// when output cannot be written.
pub fn run(values: &Values, config: &FormatterConfig) -> Result<(), CliError> {
    let tally = batch::run(Operation::Compute, values, config)?;
    if tally.failed > 0 {
        return Err(CliError::Rejected {
            count: tally.failed,
        });
    }
    Ok(())
}
