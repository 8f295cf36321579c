//! UPN, the unique pupil number used by English and Welsh schools.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Check alphabet: letters excluding `I`, `O` and `S`.
const LETTERS: &[u8; 23] = b"ABCDEFGHJKLMNPQRTUVWXYZ";

/// Validate a UPN: a leading check letter followed by twelve digits.
/// Digits are weighted by their 1-based position plus one (2 … 13); the
/// sum mod 23 selects the letter.
pub fn check_upn(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 13 {
        return Err(Malformed::Length.into());
    }
    if !bytes[0].is_ascii_uppercase() {
        return Err(Malformed::Charset.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[1..].iter().enumerate() {
        let d = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        sum += (i as u32 + 2) * u32::from(d);
    }

    let expected = LETTERS[(sum % 23) as usize];
    if expected == bytes[0] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
