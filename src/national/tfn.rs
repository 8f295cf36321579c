//! TFN, Australia's Tax File Number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate a TFN: nine digits (or eight in the legacy form) weighted
/// 1, 4, 3, 7, 5, 8, 6, 9, 10; the total must be divisible by 11.
/// Spaces in the `NNN NNN NNN` display grouping are permitted.
pub fn check_tfn(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 8 || bytes.len() > 11 {
        return Err(Malformed::Length.into());
    }

    const WEIGHTS: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];
    let mut digits = [0u8; 9];
    let mut n = 0usize;
    for &b in bytes {
        if b == b' ' {
            if !matches!(n, 3 | 6) {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 9 {
            return Err(Malformed::Length.into());
        }
        digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
    }
    if n < 8 {
        return Err(Malformed::Length.into());
    }

    let sum: u32 = digits[..n]
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    if sum % 11 == 0 {
        return Ok(());
    }

    // solve for the final digit: weight 10 ≡ −1 (mod 11) in the 9-digit
    // form, weight 9 has inverse 5 in the legacy form
    let body: u32 = digits[..n - 1]
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    let expected = if n == 9 {
        body % 11
    } else {
        (5 * (11 - body % 11)) % 11
    };
    if expected > 9 {
        return Err(CheckError::Failed);
    }
    Err(CheckError::mismatch1(expected as u8 + b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_test_number() {
        assert_eq!(check_tfn("123456782"), Ok(()));
        assert_eq!(check_tfn("123 456 782"), Ok(()));
    }

    #[test]
    fn wrong_final_digit() {
        let err = check_tfn("123456789").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"2");
    }

    #[test]
    fn legacy_eight_digit_form() {
        // 8765432 closes with 1 under weights 1,4,3,7,5,8,6,9
        assert_eq!(check_tfn("87654321"), Ok(()));
    }

    #[test]
    fn misplaced_space() {
        assert_eq!(check_tfn("12 3456782"), Err(Malformed::Separator.into()));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_tfn("1234567"), Err(Malformed::Length.into()));
        assert_eq!(check_tfn("1234567822"), Err(Malformed::Length.into()));
    }
}
