//! [`CheckDigit`] newtype.
use std::fmt;

use serde::Serialize;

use crate::error::InvalidInput;

/// A single Verhoeff check digit, stored as its numeric value `0`–`9`.
///
/// Construction goes through [`CheckDigit::try_from`] or the engine, so a
/// `CheckDigit` always renders as exactly one ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "char")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Builds a check digit from an element of D5. Callers pass table outputs,
    /// which are always below ten.
    pub(crate) const fn from_element(value: u8) -> Self {
        Self(value % 10)
    }

    /// The numeric value, `0`–`9`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII byte `b'0'`–`b'9'`.
    pub fn as_byte(self) -> u8 {
        b'0' + self.0
    }

    /// The character `'0'`–`'9'`.
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = InvalidInput;

    /// Accepts an ASCII digit byte.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        if byte.is_ascii_digit() {
            Ok(Self(byte - b'0'))
        } else {
            Err(InvalidInput::NonDigit { position: 0, byte })
        }
    }
}

impl From<CheckDigit> for char {
    fn from(digit: CheckDigit) -> Self {
        digit.as_char()
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
