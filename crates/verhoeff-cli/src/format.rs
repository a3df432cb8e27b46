/// Result and diagnostic formatting: human-readable and JSON (NDJSON) modes.
///
/// Results go to stdout, diagnostics to stderr:
///
/// - **Human mode** (default): one tab-separated result line per value.
///   Rejected values produce an `[E]` diagnostic on stderr instead, color-coded
///   when `--no-color` is unset, `NO_COLOR` is absent and stderr is a TTY.
/// - **JSON mode**: every value, rejected or not, produces one
///   [`Outcome`] object on stdout. Diagnostics are not repeated on stderr.
///
/// `--quiet` suppresses the summary and informational lines; `--verbose`
/// adds source metadata and timing.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use verhoeff_core::Outcome;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Human or JSON output.
    pub mode: FormatMode,
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit source metadata and timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(mode: FormatMode, no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            mode,
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-value output
// ---------------------------------------------------------------------------

/// Writes one outcome.
///
/// Human mode:
/// - computed: `236\t3`
/// - appended: `2363`
/// - validated: `2363\tvalid` or `2364\tinvalid`
/// - rejected: `[E] value "23x": invalid input: ...` on `err`, nothing on `out`
///
/// JSON mode writes the serialized [`Outcome`] to `out`.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_outcome<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    outcome: &Outcome,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)
        }
        FormatMode::Human => match outcome {
            Outcome::Computed { value, check_digit } => writeln!(out, "{value}\t{check_digit}"),
            Outcome::Appended { result, .. } => writeln!(out, "{result}"),
            Outcome::Validated { value, valid } => {
                let verdict = if *valid { "valid" } else { "invalid" };
                writeln!(out, "{value}\t{verdict}")
            }
            Outcome::Rejected { value, error, .. } => {
                let tag = if config.colors {
                    format!("{ANSI_RED}[E]{ANSI_RESET}")
                } else {
                    "[E]".to_owned()
                };
                writeln!(err, "{tag} value {value:?}: {error}")
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Summary and verbose lines (stderr)
// ---------------------------------------------------------------------------

/// Writes the end-of-run summary.
///
/// Human: `3 checked, 1 failed`. JSON: `{"summary":{"checked":3,"failed":1}}`.
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    checked: usize,
    failed: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(writer, "{checked} checked, {failed} failed"),
        FormatMode::Json => writeln!(
            writer,
            r#"{{"summary":{{"checked":{checked},"failed":{failed}}}}}"#
        ),
    }
}

/// Writes an informational line in verbose mode; a no-op otherwise.
///
/// Human: `[I] message`. JSON: `{"info":"message"}`.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_info<W: Write>(
    writer: &mut W,
    message: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human if config.colors => {
            writeln!(writer, "{ANSI_CYAN}[I]{ANSI_RESET} {message}")
        }
        FormatMode::Human => writeln!(writer, "[I] {message}"),
        FormatMode::Json => writeln!(
            writer,
            r#"{{"info":{}}}"#,
            serde_json::Value::from(message)
        ),
    }
}

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// Human: `label in 5us`. JSON: `{"timing":{"label":"label","micros":5}}`.
///
/// # Errors
///
/// Returns an error only if writing fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(writer, "{label} in {}us", duration.as_micros()),
        FormatMode::Json => writeln!(
            writer,
            r#"{{"timing":{{"label":{},"micros":{}}}}}"#,
            serde_json::Value::from(label),
            duration.as_micros()
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
