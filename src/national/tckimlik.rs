//! T.C. Kimlik No, Turkey's national identity number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate a TC Kimlik number: eleven digits, no leading zero. The
/// tenth digit is `(7·Σodd − Σeven) mod 10` over the first nine digits
/// (odd/even by 1-based position), the eleventh the mod-10 sum of the
/// first ten.
pub fn check_tckimlik(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 11 {
        return Err(Malformed::Length.into());
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }
    if bytes[0] == b'0' {
        return Err(Malformed::Prefix.into());
    }

    let d = |i: usize| u32::from(bytes[i] - b'0');
    let odd: u32 = (0..9).step_by(2).map(d).sum();
    let even: u32 = (1..8).step_by(2).map(d).sum();
    // 7·odd − even ≡ 7·odd + 9·even (mod 10)
    let d10 = (7 * odd + 9 * even) % 10;
    let d11 = ((0..9).map(d).sum::<u32>() + d10) % 10;

    let expected = [d10 as u8 + b'0', d11 as u8 + b'0'];
    if expected == [bytes[9], bytes[10]] {
        Ok(())
    } else {
        Err(CheckError::mismatch2(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_test_number() {
        assert_eq!(check_tckimlik("10000000146"), Ok(()));
    }

    #[test]
    fn wrong_check_digits() {
        let err = check_tckimlik("10000000100").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"46");
    }

    #[test]
    fn leading_zero_rejected() {
        assert_eq!(check_tckimlik("01000000146"), Err(Malformed::Prefix.into()));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_tckimlik("1000000014"), Err(Malformed::Length.into()));
        assert_eq!(
            check_tckimlik("100000001466"),
            Err(Malformed::Length.into())
        );
    }
}
