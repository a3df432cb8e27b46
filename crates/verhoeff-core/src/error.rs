//! The single error kind raised by the check-digit engine.
use std::fmt;

/// Input rejected by [`compute_check_digit`](crate::compute_check_digit) or
/// [`append_check_digit`](crate::append_check_digit).
///
/// Validation never produces this error: a malformed sequence simply fails to
/// validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// A byte outside `0`–`9` was found.
    NonDigit {
        /// Zero-based offset of the byte, counted from the start of the input.
        position: usize,
        /// The offending byte.
        byte: u8,
    },

    /// The input contained no digits at all.
    Empty,

    /// The buffer handed to an in-place append has no free slot after the
    /// digits.
    NoSpareSlot {
        /// Number of digits the caller declared.
        length: usize,
        /// Total size of the buffer.
        capacity: usize,
    },
}

impl InvalidInput {
    /// Returns the offending position for [`InvalidInput::NonDigit`].
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::NonDigit { position, .. } => Some(*position),
            Self::Empty | Self::NoSpareSlot { .. } => None,
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigit { position, byte } => {
                if byte.is_ascii_graphic() || *byte == b' ' {
                    write!(
                        f,
                        "invalid input: non-digit {:?} at position {position}",
                        char::from(*byte)
                    )
                } else {
                    write!(
                        f,
                        "invalid input: non-digit byte 0x{byte:02x} at position {position}"
                    )
                }
            }
            Self::Empty => f.write_str("invalid input: no digits"),
            Self::NoSpareSlot { length, capacity } => write!(
                f,
                "invalid input: buffer of {capacity} bytes has no slot after {length} digits"
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_digit_message_names_char_and_position() {
        let e = InvalidInput::NonDigit {
            position: 3,
            byte: b'x',
        };
        assert_eq!(e.to_string(), "invalid input: non-digit 'x' at position 3");
        assert_eq!(e.position(), Some(3));
    }

    #[test]
    fn non_printable_byte_is_shown_as_hex() {
        let e = InvalidInput::NonDigit {
            position: 0,
            byte: 0xFF,
        };
        assert_eq!(
            e.to_string(),
            "invalid input: non-digit byte 0xff at position 0"
        );
    }

    #[test]
    fn empty_has_no_position() {
        assert_eq!(InvalidInput::Empty.position(), None);
        assert!(InvalidInput::Empty.to_string().contains("no digits"));
    }

    #[test]
    fn no_spare_slot_mentions_sizes() {
        let msg = InvalidInput::NoSpareSlot {
            length: 4,
            capacity: 4,
        }
        .to_string();
        assert!(msg.contains("4 bytes"), "message: {msg}");
        assert!(msg.contains("4 digits"), "message: {msg}");
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(InvalidInput::Empty);
        assert!(!e.to_string().is_empty());
    }
}
