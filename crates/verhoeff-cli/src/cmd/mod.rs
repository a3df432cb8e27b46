/// Command module for the `verhoeff` CLI.
///
/// Each subcommand module exposes a `run` function that takes the resolved
/// values and returns `Ok(())` on success or a [`crate::error::CliError`].
/// The shared per-value loop lives in [`batch`].
pub mod append;
pub mod batch;
pub mod compute;
pub mod validate;
