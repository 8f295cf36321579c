//! Vehicle Identification Number (ISO 3779, North American check digit).

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Transliteration values for `A`–`Z`; `I`, `O` and `Q` are not part of
/// the VIN alphabet.
fn vin_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'H' => Some(u32::from(b - b'A') + 1),
        b'J'..=b'N' => Some(u32::from(b - b'J') + 1),
        b'P' => Some(7),
        b'R' => Some(9),
        b'S'..=b'Z' => Some(u32::from(b - b'S') + 2),
        _ => None,
    }
}

/// Per-position weights; position 9 (index 8) holds the check digit.
const WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a VIN: seventeen characters, weighted transliterated sum
/// mod 11, check digit at position 9 (`X` for value 10).
pub fn check_vin(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 17 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        if i == 8 {
            continue;
        }
        let v = vin_value(b).ok_or(Malformed::Charset)?;
        sum += v * WEIGHTS[i];
    }
    if !bytes[8].is_ascii_digit() && bytes[8] != b'X' {
        return Err(Malformed::Charset.into());
    }

    let r = sum % 11;
    let expected = if r < 10 { r as u8 + b'0' } else { b'X' };
    if expected == bytes[8] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
