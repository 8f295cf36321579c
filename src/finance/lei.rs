//! ISO 17442 Legal Entity Identifier.

use crate::algo::mod97_remainder;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an LEI: 18 uppercase alphanumeric characters followed by two
/// check digits, ISO 7064 MOD 97-10 (remainder 1 over the full string).
pub fn check_lei(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 20 {
        return Err(Malformed::Length.into());
    }
    if !bytes[18..].iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }

    let rem = mod97_remainder(bytes).ok_or(Malformed::Charset)?;
    if rem == 1 {
        return Ok(());
    }
    let body_rem = mod97_remainder(&bytes[..18]).unwrap_or(0);
    let expected = (98 - (body_rem * 100) % 97) as u8;
    Err(CheckError::mismatch2([
        expected / 10 + b'0',
        expected % 10 + b'0',
    ]))
}
