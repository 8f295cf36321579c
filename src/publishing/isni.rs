//! ISO 27729 International Standard Name Identifier.

use crate::algo::mod11_2_check;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an ISNI: sixteen characters — fifteen digits plus an ISO 7064
/// MOD 11-2 check character (`X` for value 10) — displayed in blocks of
/// four; a space is permitted after each complete block.
pub fn check_isni(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 16 || bytes.len() > 19 {
        return Err(Malformed::Length.into());
    }

    let mut sig = [0u8; 16];
    let mut n = 0usize;
    for &b in bytes {
        if b == b' ' {
            if n == 0 || n % 4 != 0 || n == 16 {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 16 {
            return Err(Malformed::Length.into());
        }
        sig[n] = b;
        n += 1;
    }
    if n != 16 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 15];
    for (slot, &b) in digits.iter_mut().zip(&sig[..15]) {
        *slot = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
    }
    if !sig[15].is_ascii_digit() && sig[15] != b'X' {
        return Err(Malformed::Charset.into());
    }

    let v = mod11_2_check(digits.into_iter());
    let expected = if v < 10 { v + b'0' } else { b'X' };
    if expected == sig[15] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
