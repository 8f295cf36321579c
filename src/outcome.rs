use std::fmt;

use thiserror::Error;

/// The check character(s) that would make a non-conformant identifier pass.
///
/// At most two ASCII characters (e.g. the two IBAN check digits), stored
/// inline so validator results stay `Copy` and allocation-free.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expected {
    buf: [u8; 2],
    len: u8,
}

impl Expected {
    /// A single expected check character.
    pub(crate) fn one(c: u8) -> Self {
        Self { buf: [c, 0], len: 1 }
    }

    /// A pair of expected check characters, in input order.
    pub(crate) fn two(c: [u8; 2]) -> Self {
        Self { buf: c, len: 2 }
    }

    /// The expected check characters as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII check characters are ever stored.
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }

    /// The expected check characters as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected({:?})", self.as_str())
    }
}

/// Structural violation detected before any checksum was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// Input length is outside the identifier's permitted range.
    #[error("length outside the permitted range")]
    Length,
    /// A character is outside the alphabet permitted at its position.
    #[error("character outside the permitted alphabet")]
    Charset,
    /// A mandatory literal prefix is missing or wrong.
    #[error("missing or wrong literal prefix")]
    Prefix,
    /// A separator appears at a position the standard does not allow.
    #[error("separator at an unexpected position")]
    Separator,
}

/// Validation failure returned by every checker.
///
/// `Malformed` means the checksum was never attempted; `Mismatch` means the
/// input is structurally valid but carries the wrong check character(s),
/// and reports what they should have been.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("malformed: {0}")]
    Malformed(#[from] Malformed),
    #[error("check digit mismatch, should be '{expected}'")]
    Mismatch { expected: Expected },
    /// Checksum failed and the scheme does not isolate a single
    /// correctable check position (generic Damm).
    #[error("checksum failed")]
    Failed,
}

impl CheckError {
    pub(crate) fn mismatch1(c: u8) -> Self {
        CheckError::Mismatch { expected: Expected::one(c) }
    }

    pub(crate) fn mismatch2(c: [u8; 2]) -> Self {
        CheckError::Mismatch { expected: Expected::two(c) }
    }

    /// The corrected check character(s), if this is a checksum mismatch.
    pub fn expected(&self) -> Option<&Expected> {
        match self {
            CheckError::Mismatch { expected } => Some(expected),
            CheckError::Malformed(_) | CheckError::Failed => None,
        }
    }
}

/// Result of a single validator call. `Ok(())` means conformant.
pub type CheckResult = Result<(), CheckError>;
