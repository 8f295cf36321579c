//! OIB, Croatia's personal identification number.

use crate::algo::mod11_10_check;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an OIB: eleven digits, ISO 7064 MOD 11,10 check digit. The
/// `HR` prefix of the VAT form is accepted.
pub fn check_oib(input: &str) -> CheckResult {
    let mut bytes = input.as_bytes();
    if let Some(rest) = bytes.strip_prefix(b"HR") {
        bytes = rest;
    }
    if bytes.len() != 11 {
        return Err(Malformed::Length.into());
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }

    let expected = mod11_10_check(bytes[..10].iter().map(|b| b - b'0'));
    if expected + b'0' == bytes[10] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}
