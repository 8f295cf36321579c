//! IMO ship identification number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an IMO number: seven digits, optionally prefixed `IMO ` or
/// `IMO`; the first six digits weighted 7 … 2, sum mod 10 is the check
/// digit.
pub fn check_imo(input: &str) -> CheckResult {
    let mut bytes = input.as_bytes();
    if let Some(rest) = bytes.strip_prefix(b"IMO") {
        bytes = rest.strip_prefix(b" ").unwrap_or(rest);
    }
    if bytes.len() != 7 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..6].iter().enumerate() {
        let d = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        sum += (7 - i as u32) * u32::from(d);
    }
    if !bytes[6].is_ascii_digit() {
        return Err(Malformed::Charset.into());
    }

    let expected = (sum % 10) as u8 + b'0';
    if expected == bytes[6] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
