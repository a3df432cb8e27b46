//! Integration seam for hosts that own their string storage.
//!
//! A host (a database extension, the `verhoeff` CLI, an FFI shim) extracts a
//! byte span from its native string representation and calls in here. The
//! adapter sizes the output for `len + 1` bytes, drives the in-place engine
//! and hands back either an owned value or a boolean. On failure no
//! partially-written value escapes.
//!
//! [`Operation::apply`] additionally packages each call as a serializable
//! [`Outcome`] record for hosts that report results per value.
use serde::Serialize;

use crate::digit::CheckDigit;
use crate::engine::{append_check_digit, compute_check_digit, validate_len};
use crate::error::InvalidInput;

/// Copies `bytes` into a buffer with one reserved slot and appends the check
/// digit there.
///
/// # Errors
///
/// Returns [`InvalidInput`] if `bytes` is empty or contains a non-digit; the
/// scratch buffer is dropped.
pub fn append_to_span(bytes: &[u8]) -> Result<Vec<u8>, InvalidInput> {
    let mut out = Vec::with_capacity(bytes.len() + 1);
    out.extend_from_slice(bytes);
    out.push(0);
    let mut len = bytes.len();
    append_check_digit(&mut out, &mut len)?;
    Ok(out)
}

/// Validates the first `len` bytes of a host-owned span.
pub fn validate_span(bytes: &[u8], len: usize) -> bool {
    validate_len(bytes, len)
}

// ---------------------------------------------------------------------------
// Per-value records
// ---------------------------------------------------------------------------

/// The three engine operations a host can invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Compute the check digit of a payload.
    Compute,
    /// Return the payload with its check digit appended.
    Append,
    /// Check a value that ends in its check digit.
    Validate,
}

/// Result of applying an [`Operation`] to one value.
///
/// Serializes as a flat JSON object tagged by `"outcome"`, e.g.
/// `{"outcome":"validated","value":"2363","valid":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A check digit was computed.
    Computed {
        /// The payload as given.
        value: String,
        /// Its check digit.
        check_digit: CheckDigit,
    },
    /// A check digit was appended.
    Appended {
        /// The payload as given.
        value: String,
        /// Payload followed by its check digit.
        result: String,
    },
    /// A value was validated. Malformed values land here with `valid: false`.
    Validated {
        /// The value as given.
        value: String,
        /// Whether the trailing check digit matches.
        valid: bool,
    },
    /// Compute or append refused the value.
    Rejected {
        /// The value as given.
        value: String,
        /// Human-readable reason.
        error: String,
        /// Offending byte offset, when there is one.
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
    },
}

impl Outcome {
    fn rejected(value: &str, err: InvalidInput) -> Self {
        Self::Rejected {
            value: value.to_owned(),
            error: err.to_string(),
            position: err.position(),
        }
    }

    /// The value the outcome refers to.
    pub fn value(&self) -> &str {
        match self {
            Self::Computed { value, .. }
            | Self::Appended { value, .. }
            | Self::Validated { value, .. }
            | Self::Rejected { value, .. } => value,
        }
    }

    /// `true` unless the value was rejected or failed validation.
    pub fn is_success(&self) -> bool {
        match self {
            Self::Computed { .. } | Self::Appended { .. } => true,
            Self::Validated { valid, .. } => *valid,
            Self::Rejected { .. } => false,
        }
    }
}

impl Operation {
    /// Runs the operation on `value` and records the result.
    pub fn apply(self, value: &str) -> Outcome {
        let bytes = value.as_bytes();
        match self {
            Self::Compute => match compute_check_digit(bytes) {
                Ok(check_digit) => Outcome::Computed {
                    value: value.to_owned(),
                    check_digit,
                },
                Err(e) => Outcome::rejected(value, e),
            },
            Self::Append => match append_to_span(bytes) {
                // The engine only accepts ASCII digits, so the conversion is lossless.
                Ok(out) => Outcome::Appended {
                    value: value.to_owned(),
                    result: String::from_utf8_lossy(&out).into_owned(),
                },
                Err(e) => Outcome::rejected(value, e),
            },
            Self::Validate => Outcome::Validated {
                value: value.to_owned(),
                valid: validate_span(bytes, bytes.len()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    #[test]
    fn append_to_span_allocates_one_extra_byte() {
        let out = append_to_span(b"236").expect("digits");
        assert_eq!(out, b"2363");
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn append_to_span_rejects_non_digits() {
        let err = append_to_span(b"12-34").expect_err("hyphen");
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn validate_span_respects_explicit_length() {
        assert!(validate_span(b"2363\0\0", 4));
        assert!(!validate_span(b"2363\0\0", 6));
    }

    #[test]
    fn apply_compute() {
        match Operation::Compute.apply("236") {
            Outcome::Computed { value, check_digit } => {
                assert_eq!(value, "236");
                assert_eq!(check_digit.as_char(), '3');
            }
            other => panic!("expected Computed, got {other:?}"),
        }
    }

    #[test]
    fn apply_append_and_validate_round_trip() {
        let appended = Operation::Append.apply("42");
        assert!(appended.is_success());
        let Outcome::Appended { result, .. } = appended else {
            panic!("expected Appended");
        };
        assert_eq!(result, "420");
        assert!(Operation::Validate.apply(&result).is_success());
    }

    #[test]
    fn apply_rejects_with_position() {
        let outcome = Operation::Append.apply("4x");
        assert!(!outcome.is_success());
        assert_eq!(outcome.value(), "4x");
        match outcome {
            Outcome::Rejected { position, .. } => assert_eq!(position, Some(1)),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn apply_validate_fails_closed() {
        assert_eq!(
            Operation::Validate.apply("23x3"),
            Outcome::Validated {
                value: "23x3".to_owned(),
                valid: false
            }
        );
    }

    #[test]
    fn outcomes_serialize_as_tagged_objects() {
        let json = serde_json::to_string(&Operation::Compute.apply("236")).expect("json");
        assert_eq!(
            json,
            r#"{"outcome":"computed","value":"236","check_digit":"3"}"#
        );

        let json = serde_json::to_string(&Operation::Validate.apply("2364")).expect("json");
        assert_eq!(
            json,
            r#"{"outcome":"validated","value":"2364","valid":false}"#
        );

        let json = serde_json::to_string(&Operation::Compute.apply("")).expect("json");
        assert_eq!(
            json,
            r#"{"outcome":"rejected","value":"","error":"invalid input: no digits"}"#
        );
    }
}
