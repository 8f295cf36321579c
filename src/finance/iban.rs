//! ISO 13616 International Bank Account Number.

use crate::algo::mod97_remainder;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an IBAN: 15–34 alphanumeric characters, two-letter country
/// prefix, check digits at positions 3–4.
///
/// The MOD 97-10 fold runs over the rearranged string (BBAN, then country
/// code, then check digits) and must leave remainder 1. On mismatch the
/// two digits that would make the account number valid are reported.
pub fn check_iban(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 15 || bytes.len() > 34 {
        return Err(Malformed::Length.into());
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(Malformed::Prefix.into());
    }
    if !bytes[2..4].iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }

    let bban = &bytes[4..];
    // remainder of BBAN ++ country ++ "00", then the closing digit pair
    let mut rem = mod97_remainder(bban).ok_or(Malformed::Charset)?;
    for &b in &bytes[..2] {
        rem = (rem * 100 + u64::from(b - b'A') + 10) % 97;
    }
    let expected = (98 - (rem * 100) % 97) as u8;
    let expected = [expected / 10 + b'0', expected % 10 + b'0'];
    if expected == [bytes[2], bytes[3]] {
        Ok(())
    } else {
        Err(CheckError::mismatch2(expected))
    }
}
