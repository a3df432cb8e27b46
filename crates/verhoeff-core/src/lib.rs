//! Verhoeff check digits.
//!
//! The Verhoeff scheme appends one decimal check digit to a numeric string.
//! It detects every single-digit substitution and every transposition of two
//! adjacent digits, the errors a plain mod-10 sum misses. The arithmetic runs
//! in the dihedral group D5 through three constant tables ([`tables`]).
//!
//! The crate is pure: no I/O, no global mutable state, no allocation in the
//! engine itself. All operations are safe to call from any number of threads.
//!
//! ```
//! use verhoeff_core::{compute_check_digit, validate, with_check_digit};
//!
//! assert_eq!(compute_check_digit(b"236").map(|d| d.as_char()), Ok('3'));
//! assert_eq!(with_check_digit("236").as_deref(), Ok("2363"));
//! assert!(validate(b"2363"));
//! assert!(!validate(b"2336"));
//! ```
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod digit;
pub mod engine;
pub mod error;
pub mod host;
pub mod tables;

pub use digit::CheckDigit;
pub use engine::{
    append_check_digit, compute_check_digit, strip_check_digit, validate, validate_len,
    with_check_digit,
};
pub use error::InvalidInput;
pub use host::{Operation, Outcome, append_to_span, validate_span};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
