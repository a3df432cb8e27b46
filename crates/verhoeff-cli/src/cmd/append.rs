//! Implementation of `verhoeff append [VALUE]...`.
//!
//! Prints every value with its check digit appended, the CLI counterpart of
//! the database function that returns its text argument extended by one
//! character.
//!
//! Exit codes:
//! - 0 = every value was extended
//! - 1 = at least one value was rejected; nothing is printed for it on stdout
//! - 2 = the input could not be read
use verhoeff_core::Operation;

use crate::cmd::batch::{self, Values};
use crate::error::CliError;
use crate::format::FormatterConfig;

/// Runs the `append` command.
///
/// # Errors
///
/// [`CliError::Rejected`] when any value is rejected; [`CliError::IoError`]
/// when output cannot be written.
pub fn run(values: &Values, config: &FormatterConfig) -> Result<(), CliError> {
    let tally = batch::run(Operation::Append, values, config)?;
    if tally.failed > 0 {
        return Err(CliError::Rejected {
            count: tally.failed,
        });
    }
    Ok(())
}
