//! IPOS application number (Singapore intellectual property office).

use crate::algo::damm10_fold;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an IPOS application number: a two-digit filing-type prefix
/// (`10`, `11`, `20`, `30`, `40`), four-digit year, five-digit serial, a
/// check letter in `P`–`Y` (the Damm residue of the nine year/serial
/// digits), and an optional `-NN` sub-case suffix.
pub fn check_iposan(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 12 && bytes.len() != 15 {
        return Err(Malformed::Length.into());
    }
    if !matches!(&bytes[..2], b"10" | b"11" | b"20" | b"30" | b"40") {
        return Err(Malformed::Prefix.into());
    }

    let mut digits = [0u8; 9];
    for (slot, &b) in digits.iter_mut().zip(&bytes[2..11]) {
        *slot = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
    }
    if !(b'P'..=b'Y').contains(&bytes[11]) {
        return Err(Malformed::Charset.into());
    }
    if bytes.len() == 15 {
        if bytes[12] != b'-' {
            return Err(Malformed::Separator.into());
        }
        if !bytes[13].is_ascii_digit() || !bytes[14].is_ascii_digit() {
            return Err(Malformed::Charset.into());
        }
    }

    let expected = b'P' + damm10_fold(digits.into_iter());
    if expected == bytes[11] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
