//! Aadhaar, India's resident identification number.

use crate::algo::verhoeff_check_digit;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an Aadhaar number: twelve digits, Verhoeff-secured, first
/// digit ≥ 2 (0 and 1 are reserved). Spaces are permitted after each
/// block of four.
pub fn check_aadhaar(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 12 || bytes.len() > 14 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 12];
    let mut n = 0usize;
    for &b in bytes {
        if b == b' ' {
            if !matches!(n, 4 | 8) {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 12 {
            return Err(Malformed::Length.into());
        }
        digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
    }
    if n != 12 {
        return Err(Malformed::Length.into());
    }
    if digits[0] < 2 {
        return Err(Malformed::Prefix.into());
    }

    let expected = verhoeff_check_digit(&digits[..11]);
    if expected == digits[11] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}
