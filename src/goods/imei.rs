//! International Mobile Equipment Identity (GSMA).

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an IMEI: fifteen digits, Luhn-secured final digit, with
/// hyphens permitted between the TAC/serial/check groups
/// (`AA-BBBBBB-CCCCCC-D`). A sixteen-digit IMEISV carries no check digit
/// and is accepted on shape alone.
pub fn check_imei(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 15 || bytes.len() > 19 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 16];
    let mut n = 0usize;
    for &b in bytes {
        if b == b'-' {
            if !matches!(n, 2 | 8 | 14) {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 16 {
            return Err(Malformed::Length.into());
        }
        digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
    }

    match n {
        // IMEISV: two software-version digits instead of a check digit
        16 => Ok(()),
        15 => {
            let expected = crate::algo::luhn_check_digit(&digits[..14]);
            if expected == digits[14] {
                Ok(())
            } else {
                Err(CheckError::mismatch1(expected + b'0'))
            }
        }
        _ => Err(Malformed::Length.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_imei() {
        assert_eq!(check_imei("490154203237518"), Ok(()));
        assert_eq!(check_imei("49-015420-323751-8"), Ok(()));
    }

    #[test]
    fn imeisv_has_no_check_digit() {
        assert_eq!(check_imei("4901542032375181"), Ok(()));
    }

    #[test]
    fn wrong_check_digit() {
        let err = check_imei("490154203237510").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"8");
    }

    #[test]
    fn misplaced_hyphen() {
        assert_eq!(
            check_imei("4901-54203237518"),
            Err(Malformed::Separator.into())
        );
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_imei("49015420323751"), Err(Malformed::Length.into()));
        assert_eq!(
            check_imei("49015420323751812"),
            Err(Malformed::Length.into())
        );
    }
}
