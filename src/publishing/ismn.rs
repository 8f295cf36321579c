//! ISO 10957 International Standard Music Number: the legacy `M` form
//! and the `979-0` EAN form.

use crate::outcome::{CheckError, CheckResult, Malformed};

use super::isbn::gs1_check13;

/// Validate a ten-character ISMN: literal `M`, eight digits, one check
/// digit. The `M` counts 3 × 3, the digits alternate weights 1, 3, …;
/// check digit mod 10. Hyphens between groups are tolerated.
pub fn check_ismn10(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 10 || bytes.len() > 13 {
        return Err(Malformed::Length.into());
    }

    let mut sig = [0u8; 10];
    let mut n = 0usize;
    let mut prev_sep = true;
    for &b in bytes {
        if b == b'-' {
            if prev_sep {
                return Err(Malformed::Separator.into());
            }
            prev_sep = true;
            continue;
        }
        if n == 10 {
            return Err(Malformed::Length.into());
        }
        sig[n] = b;
        n += 1;
        prev_sep = false;
    }
    if prev_sep || n != 10 {
        return Err(Malformed::Length.into());
    }
    if sig[0] != b'M' {
        return Err(Malformed::Prefix.into());
    }

    let mut sum = 9u32; // 'M' carries value 3 at weight 3
    for (i, &b) in sig[1..9].iter().enumerate() {
        let d = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        let w = if i % 2 == 0 { 1 } else { 3 };
        sum += w * u32::from(d);
    }
    if !sig[9].is_ascii_digit() {
        return Err(Malformed::Charset.into());
    }

    let expected = ((10 - sum % 10) % 10) as u8 + b'0';
    if expected == sig[9] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

/// Validate a thirteen-digit ISMN: `9790` prefix, GS1 mod-10 check
/// digit. Hyphens between groups are tolerated.
pub fn check_ismn13(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 13 || bytes.len() > 17 {
        return Err(Malformed::Length.into());
    }

    let mut sig = [0u8; 13];
    let mut n = 0usize;
    let mut prev_sep = true;
    for &b in bytes {
        if b == b'-' {
            if prev_sep {
                return Err(Malformed::Separator.into());
            }
            prev_sep = true;
            continue;
        }
        if n == 13 {
            return Err(Malformed::Length.into());
        }
        sig[n] = b;
        n += 1;
        prev_sep = false;
    }
    if prev_sep || n != 13 {
        return Err(Malformed::Length.into());
    }
    if !sig.starts_with(b"9790") {
        return Err(Malformed::Prefix.into());
    }

    let mut digits = [0u8; 13];
    for (slot, &b) in digits.iter_mut().zip(&sig) {
        *slot = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
    }
    let expected = gs1_check13(&digits) + b'0';
    if expected == sig[12] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

/// Validate an ISMN in either form.
pub fn check_ismn(input: &str) -> CheckResult {
    if input.as_bytes().first() == Some(&b'M') {
        check_ismn10(input)
    } else {
        check_ismn13(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ismn10_vectors() {
        assert_eq!(check_ismn10("M230671187"), Ok(()));
        assert_eq!(check_ismn10("M-2306-7118-7"), Ok(()));
        assert_eq!(check_ismn10("M060115615"), Ok(()));
    }

    #[test]
    fn ismn13_vectors() {
        assert_eq!(check_ismn13("9790260000438"), Ok(()));
        assert_eq!(check_ismn13("979-0-2600-0043-8"), Ok(()));
    }

    #[test]
    fn auto_dispatch() {
        assert_eq!(check_ismn("M230671187"), Ok(()));
        assert_eq!(check_ismn("9790260000438"), Ok(()));
    }

    #[test]
    fn wrong_check_digit() {
        let err = check_ismn10("M230671180").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"7");
        let err = check_ismn13("9790260000430").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"8");
    }

    #[test]
    fn missing_m_prefix() {
        assert_eq!(check_ismn10("X230671187"), Err(Malformed::Prefix.into()));
    }

    #[test]
    fn ismn13_needs_9790() {
        assert_eq!(check_ismn13("9780306406157"), Err(Malformed::Prefix.into()));
        assert_eq!(check_ismn13("9770317847001"), Err(Malformed::Prefix.into()));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_ismn10("M23067118"), Err(Malformed::Length.into()));
        assert_eq!(check_ismn10("M2306711877"), Err(Malformed::Length.into()));
    }
}
