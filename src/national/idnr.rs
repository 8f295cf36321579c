//! IdNr, Germany's taxpayer identification number.

use crate::algo::mod11_10_check;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an IdNr: eleven digits, ISO 7064 MOD 11,10 check digit, no
/// leading zero. Spaces are permitted in the `NN NNN NNN NNN` display
/// grouping.
pub fn check_idnr(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 11 || bytes.len() > 14 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 11];
    let mut n = 0usize;
    for &b in bytes {
        if b == b' ' {
            if !matches!(n, 2 | 5 | 8) {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 11 {
            return Err(Malformed::Length.into());
        }
        digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
    }
    if n != 11 {
        return Err(Malformed::Length.into());
    }
    if digits[0] == 0 {
        return Err(Malformed::Prefix.into());
    }

    let expected = mod11_10_check(digits[..10].iter().copied());
    if expected == digits[10] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}
