//! ISO 6346 shipping container code (BIC code).

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Letter values skip multiples of 11 (`A` = 10, `B` = 12, … `Z` = 38)
/// so that no letter collides with another value mod 11.
fn container_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'Z' => {
            let idx = u32::from(b - b'A');
            Some(10 + idx + (idx + 9) / 10)
        }
        _ => None,
    }
}

/// Validate a container code: three-letter owner code, equipment
/// category letter, six-digit serial, check digit. Values are weighted
/// 2^position; the sum mod 11 (mod 10) is the check digit.
pub fn check_bicc(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 11 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..10].iter().enumerate() {
        let v = if i < 4 {
            if !b.is_ascii_uppercase() {
                return Err(Malformed::Charset.into());
            }
            container_value(b).ok_or(Malformed::Charset)?
        } else {
            u32::from(crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?)
        };
        sum += v << i;
    }
    if !bytes[10].is_ascii_digit() {
        return Err(Malformed::Charset.into());
    }

    let expected = (sum % 11 % 10) as u8 + b'0';
    if expected == bytes[10] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
