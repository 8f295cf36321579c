//! ISO 6166 International Securities Identification Number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an ISIN: two-letter country/agency prefix, nine alphanumeric
/// characters, one check digit.
///
/// The check digit is a Luhn digit over the two-digit letter expansion of
/// the first eleven characters (`A` = 10 … `Z` = 35), doubling from the
/// rightmost expanded digit.
pub fn check_isin(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 12 {
        return Err(Malformed::Length.into());
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(Malformed::Prefix.into());
    }
    if !bytes[11].is_ascii_digit() {
        return Err(Malformed::Charset.into());
    }

    // expand the first 11 characters to digit values
    let mut expanded = [0u8; 22];
    let mut n = 0;
    for &b in &bytes[..11] {
        match b {
            b'0'..=b'9' => {
                expanded[n] = b - b'0';
                n += 1;
            }
            b'A'..=b'Z' => {
                let v = b - b'A' + 10;
                expanded[n] = v / 10;
                expanded[n + 1] = v % 10;
                n += 2;
            }
            _ => return Err(Malformed::Charset.into()),
        }
    }

    let expected = crate::algo::luhn_check_digit(&expanded[..n]) + b'0';
    if expected == bytes[11] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
