//! ISO 3297 International Standard Serial Number: the classic eight
//! character form and the `977` EAN form.

use crate::outcome::{CheckError, CheckResult, Malformed};

use super::isbn::gs1_check13;

/// Validate an eight-character ISSN (`NNNN-NNNC`): seven digits weighted
/// 8 … 2, check character mod 11 (`X` for 10). The hyphen after the
/// fourth digit is optional but permitted nowhere else.
pub fn check_issn8(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 8 || bytes.len() > 9 {
        return Err(Malformed::Length.into());
    }

    let mut sig = [0u8; 8];
    let mut n = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'-' {
            if i != 4 {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 8 {
            return Err(Malformed::Length.into());
        }
        sig[n] = b;
        n += 1;
    }
    if n != 8 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in sig[..7].iter().enumerate() {
        let d = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        sum += (8 - i as u32) * u32::from(d);
    }
    if !sig[7].is_ascii_digit() && sig[7] != b'X' {
        return Err(Malformed::Charset.into());
    }

    let r = (11 - sum % 11) % 11;
    let expected = if r < 10 { r as u8 + b'0' } else { b'X' };
    if expected == sig[7] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

/// Validate a thirteen-digit ISSN (EAN form): `977` prefix, GS1 mod-10
/// check digit.
pub fn check_issn13(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 13 {
        return Err(Malformed::Length.into());
    }
    if !bytes.starts_with(b"977") {
        return Err(Malformed::Prefix.into());
    }
    let mut digits = [0u8; 13];
    for (slot, &b) in digits.iter_mut().zip(bytes) {
        *slot = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
    }
    let expected = gs1_check13(&digits) + b'0';
    if expected == bytes[12] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

/// Validate an ISSN in either form.
pub fn check_issn(input: &str) -> CheckResult {
    if input.len() == 13 && input.as_bytes().starts_with(b"977") {
        check_issn13(input)
    } else {
        check_issn8(input)
    }
}
