//! The Verhoeff engine: compute, append and validate.
//!
//! Every operation folds the digits from right to left through the tables in
//! [`crate::tables`]. For the digit at position `i` (the last byte is position
//! 0) the accumulator becomes `D[c][P[(i + offset) % 8][digit]]`, starting at
//! `c = 0`:
//!
//! - Validation folds the sequence as-is (`offset = 0`). The trailing check
//!   digit sits at position 0 and the sequence is valid iff the fold ends at
//!   `0`.
//! - Computation folds a payload that has no check digit yet (`offset = 1`),
//!   shifting every digit one place away from the slot the check digit will
//!   occupy. The check digit is then `INV[c]`.
//!
//! All functions operate on the caller's bytes and never allocate, except the
//! `String` convenience wrappers at the bottom of this module.
use crate::digit::CheckDigit;
use crate::error::InvalidInput;
use crate::tables::{D, INV, P, PERMUTATION_PERIOD};

// ---------------------------------------------------------------------------
// Fold
// ---------------------------------------------------------------------------

/// Returns the first byte (scanning left to right) that is not an ASCII digit.
fn first_non_digit(digits: &[u8]) -> Option<InvalidInput> {
    digits
        .iter()
        .enumerate()
        .find(|(_, b)| !b.is_ascii_digit())
        .map(|(position, &byte)| InvalidInput::NonDigit { position, byte })
}

/// Folds an all-digit sequence. `offset` is the position of the rightmost
/// byte relative to the check-digit slot.
///
/// Callers must have rejected non-digit bytes already.
fn fold(digits: &[u8], offset: usize) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &byte)| {
            let row = &P[(i + offset) % PERMUTATION_PERIOD];
            let permuted = row[usize::from(byte - b'0')];
            D[usize::from(c)][usize::from(permuted)]
        })
}

// ---------------------------------------------------------------------------
// Compute / append
// ---------------------------------------------------------------------------

/// Computes the check digit that makes `digits` valid once appended.
///
/// # Errors
///
/// - [`InvalidInput::Empty`] if `digits` is empty.
/// - [`InvalidInput::NonDigit`] for the leftmost byte outside `0`–`9`. No
///   byte is ever coerced to a digit.
///
/// # Examples
///
/// ```
/// use verhoeff_core::compute_check_digit;
///
/// let digit = compute_check_digit(b"236").unwrap();
/// assert_eq!(digit.as_char(), '3');
/// ```
pub fn compute_check_digit(digits: &[u8]) -> Result<CheckDigit, InvalidInput> {
    if digits.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if let Some(err) = first_non_digit(digits) {
        return Err(err);
    }
    let c = fold(digits, 1);
    Ok(CheckDigit::from_element(INV[usize::from(c)]))
}

/// Appends the check digit in place.
///
/// `buffer[..*length]` holds the payload digits; `buffer[*length]` is the
/// reserved slot. On success the check digit is written to that slot and
/// `*length` is incremented.
///
/// On failure neither `buffer` nor `*length` is touched: no sentinel byte is
/// written and the logical length never advances.
///
/// # Errors
///
/// - [`InvalidInput::NoSpareSlot`] if `buffer` has no byte after the payload
///   (including `*length > buffer.len()`).
/// - [`InvalidInput::Empty`] if `*length == 0`.
/// - [`InvalidInput::NonDigit`] for the leftmost non-digit payload byte.
///
/// # Examples
///
/// ```
/// use verhoeff_core::{append_check_digit, validate};
///
/// let mut buf = *b"42_";
/// let mut len = 2;
/// append_check_digit(&mut buf, &mut len).unwrap();
/// assert_eq!(len, 3);
/// assert!(validate(&buf[..len]));
/// ```
pub fn append_check_digit(
    buffer: &mut [u8],
    length: &mut usize,
) -> Result<CheckDigit, InvalidInput> {
    let capacity = buffer.len();
    let no_slot = InvalidInput::NoSpareSlot {
        length: *length,
        capacity,
    };
    let Some((digits, rest)) = buffer.split_at_mut_checked(*length) else {
        return Err(no_slot);
    };
    let Some(slot) = rest.first_mut() else {
        return Err(no_slot);
    };

    let check = compute_check_digit(digits)?;
    *slot = check.as_byte();
    *length += 1;
    Ok(check)
}

// ---------------------------------------------------------------------------
// Validate
// ---------------------------------------------------------------------------

/// Returns `true` iff the last byte of `digits` is the correct check digit for
/// the bytes before it.
///
/// Fails closed: an empty sequence or any non-digit byte yields `false`.
///
/// # Examples
///
/// ```
/// use verhoeff_core::validate;
///
/// assert!(validate(b"2363"));
/// assert!(!validate(b"2364"));
/// assert!(!validate(b"23a3"));
/// ```
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() || first_non_digit(digits).is_some() {
        return false;
    }
    fold(digits, 0) == 0
}

/// Length-qualified [`validate`]: checks exactly `digits[..len]`.
///
/// A `len` past the end of `digits` yields `false`.
pub fn validate_len(digits: &[u8], len: usize) -> bool {
    digits.get(..len).is_some_and(validate)
}

// ---------------------------------------------------------------------------
// String helpers
// ---------------------------------------------------------------------------

/// Returns an owned copy of `payload` with its check digit appended.
///
/// # Errors
///
/// Same as [`compute_check_digit`].
pub fn with_check_digit(payload: &str) -> Result<String, InvalidInput> {
    let check = compute_check_digit(payload.as_bytes())?;
    let mut out = String::with_capacity(payload.len() + 1);
    out.push_str(payload);
    out.push(check.as_char());
    Ok(out)
}

/// Returns the payload of a valid checksummed value, without its check digit.
///
/// Returns `None` when `value` does not validate or has no payload (a lone
/// check digit).
pub fn strip_check_digit(value: &str) -> Option<&str> {
    if value.len() < 2 || !validate(value.as_bytes()) {
        return None;
    }
    // validate() guarantees all-ASCII, so this is a char boundary.
    value.get(..value.len() - 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn compute(s: &str) -> char {
        compute_check_digit(s.as_bytes())
            .expect("digits only")
            .as_char()
    }

    // ── compute ──────────────────────────────────────────────────────────────

    #[test]
    fn compute_236_is_3() {
        assert_eq!(compute("236"), '3');
    }

    #[test]
    fn compute_single_zero_is_4() {
        assert_eq!(compute("0"), '4');
        assert!(validate(b"04"));
    }

    #[test]
    fn compute_pinned_vectors() {
        assert_eq!(compute("12345"), '1');
        assert_eq!(compute("142857"), '0');
        assert_eq!(compute("123456789"), '0');
        assert_eq!(compute("8473643095483728456789"), '2');
    }

    #[test]
    fn compute_is_deterministic() {
        let first = compute("9876543210123");
        for _ in 0..10 {
            assert_eq!(compute("9876543210123"), first);
        }
    }

    #[test]
    fn compute_rejects_empty() {
        assert_eq!(compute_check_digit(b""), Err(InvalidInput::Empty));
    }

    #[test]
    fn compute_rejects_non_digit_with_leftmost_position() {
        assert_eq!(
            compute_check_digit(b"12x4y"),
            Err(InvalidInput::NonDigit {
                position: 2,
                byte: b'x'
            })
        );
    }

    #[test]
    fn compute_does_not_treat_nul_as_zero() {
        assert!(compute_check_digit(b"1\x002").is_err());
    }

    // ── append ───────────────────────────────────────────────────────────────

    #[test]
    fn append_to_42_produces_valid_value() {
        let mut buf = *b"42\0";
        let mut len = 2;
        let check = append_check_digit(&mut buf, &mut len).expect("append");
        assert_eq!(len, 3);
        assert_eq!(check.as_char(), '0');
        assert_eq!(&buf, b"420");
        assert!(validate(&buf[..len]));
    }

    #[test]
    fn append_leaves_bytes_after_slot_untouched() {
        let mut buf = *b"236__";
        let mut len = 3;
        append_check_digit(&mut buf, &mut len).expect("append");
        assert_eq!(&buf, b"2363_");
        assert_eq!(len, 4);
    }

    #[test]
    fn append_failure_leaves_buffer_and_length_unchanged() {
        let mut buf = *b"4a2_";
        let mut len = 3;
        let err = append_check_digit(&mut buf, &mut len).expect_err("non-digit");
        assert_eq!(err.position(), Some(1));
        assert_eq!(&buf, b"4a2_");
        assert_eq!(len, 3);
    }

    #[test]
    fn append_without_spare_slot_is_rejected() {
        let mut buf = *b"236";
        let mut len = 3;
        assert_eq!(
            append_check_digit(&mut buf, &mut len),
            Err(InvalidInput::NoSpareSlot {
                length: 3,
                capacity: 3
            })
        );
        assert_eq!(&buf, b"236");
        assert_eq!(len, 3);
    }

    #[test]
    fn append_with_length_past_buffer_is_rejected() {
        let mut buf = *b"12";
        let mut len = 5;
        assert!(matches!(
            append_check_digit(&mut buf, &mut len),
            Err(InvalidInput::NoSpareSlot { .. })
        ));
        assert_eq!(len, 5);
    }

    #[test]
    fn append_empty_payload_is_rejected() {
        let mut buf = [b'_'; 1];
        let mut len = 0;
        assert_eq!(
            append_check_digit(&mut buf, &mut len),
            Err(InvalidInput::Empty)
        );
        assert_eq!(buf, [b'_']);
        assert_eq!(len, 0);
    }

    // ── validate ─────────────────────────────────────────────────────────────

    #[test]
    fn validate_reference_vectors() {
        assert!(validate(b"2363"));
        assert!(!validate(b"2364"));
        assert!(!validate(b"2336"));
        assert!(validate(b"0002"));
        assert!(!validate(b"0000"));
        assert!(validate(b"1234567890"));
    }

    #[test]
    fn validate_fails_closed_on_non_digits() {
        assert!(!validate(b"236 3"));
        assert!(!validate(b"-2363"));
        // Reading '/' as 0 would yield the valid "0002".
        assert!(!validate(b"00/2"));
    }

    #[test]
    fn validate_empty_is_false() {
        assert!(!validate(b""));
    }

    #[test]
    fn validate_len_matches_validate_on_prefix() {
        let buf = b"2363trailing";
        assert!(validate_len(buf, 4));
        assert!(!validate_len(buf, 5));
        assert_eq!(validate_len(buf, 3), validate(b"236"));
        assert!(!validate_len(buf, 0));
    }

    #[test]
    fn validate_len_past_end_is_false() {
        assert!(!validate_len(b"2363", 5));
    }

    // ── string helpers ───────────────────────────────────────────────────────

    #[test]
    fn with_check_digit_appends() {
        assert_eq!(with_check_digit("236").expect("digits"), "2363");
        assert!(with_check_digit("23.6").is_err());
    }

    #[test]
    fn strip_check_digit_returns_payload() {
        assert_eq!(strip_check_digit("2363"), Some("236"));
        assert_eq!(strip_check_digit("2364"), None);
        assert_eq!(strip_check_digit("0"), None);
        assert_eq!(strip_check_digit(""), None);
    }
}
