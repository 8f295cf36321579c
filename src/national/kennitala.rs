//! Kennitala, Iceland's personal/organisation identification number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Birth-record weights for the first eight digits.
const WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Validate a kennitala: `DDMMYY-NNCK` — six birth-date digits (first
/// digit ≤ 7; organisations add 40 to the day), two sequence digits
/// (≥ 20), check digit, century digit (8, 9 or 0). The hyphen after the
/// date part is optional.
pub fn check_kennitala(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 10 || bytes.len() > 11 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 10];
    let mut n = 0usize;
    for &b in bytes {
        if b == b'-' {
            if n != 6 {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 10 {
            return Err(Malformed::Length.into());
        }
        digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
    }
    if n != 10 {
        return Err(Malformed::Length.into());
    }
    // day ranges 01–31 and 41–71, so the leading digit caps at 7
    if digits[0] > 7 {
        return Err(Malformed::Charset.into());
    }
    // the sequence part starts at 20
    if digits[6] < 2 {
        return Err(Malformed::Charset.into());
    }
    // century digit: 8 (1800s), 9 (1900s) or 0 (2000s)
    if digits[9] != 8 && digits[9] != 9 && digits[9] != 0 {
        return Err(Malformed::Charset.into());
    }

    let sum: u32 = digits[..8]
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    let r = sum % 11;
    if r == 10 {
        // no check digit closes this body; such numbers are never issued
        return Err(CheckError::Failed);
    }
    let expected = ((11 - r) % 11) as u8;
    if expected == digits[8] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}
