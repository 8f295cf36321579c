//! SEDOL (Stock Exchange Daily Official List) identifier.

use crate::algo::alphabet::is_consonant;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Per-position weights of the six body characters.
const WEIGHTS: [u32; 6] = [1, 3, 1, 7, 3, 9];

/// Validate a SEDOL: six characters over digits and consonants, one
/// trailing check digit; weighted sum mod 10.
pub fn check_sedol(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 7 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..6].iter().enumerate() {
        let d = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            _ if is_consonant(b) => u32::from(b - b'A') + 10,
            _ => return Err(Malformed::Charset.into()),
        };
        sum += WEIGHTS[i] * d;
    }
    if !bytes[6].is_ascii_digit() {
        return Err(Malformed::Charset.into());
    }

    let expected = ((10 - sum % 10) % 10) as u8 + b'0';
    if expected == bytes[6] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sedols() {
        assert_eq!(check_sedol("0263494"), Ok(())); // BAE Systems
        assert_eq!(check_sedol("B0YBKJ7"), Ok(()));
        assert_eq!(check_sedol("2046251"), Ok(()));
    }

    #[test]
    fn wrong_check_digit() {
        let err = check_sedol("0263490").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"4");
    }

    #[test]
    fn vowels_are_malformed() {
        assert_eq!(check_sedol("A263494"), Err(Malformed::Charset.into()));
        assert_eq!(check_sedol("0E63494"), Err(Malformed::Charset.into()));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_sedol("026349"), Err(Malformed::Length.into()));
        assert_eq!(check_sedol("02634940"), Err(Malformed::Length.into()));
    }

    #[test]
    fn letter_check_digit_is_malformed() {
        assert_eq!(check_sedol("026349B"), Err(Malformed::Charset.into()));
    }
}
