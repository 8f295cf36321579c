//! ISO 7064 check character systems: MOD 97-10, MOD 11-2 and the hybrid
//! MOD 11,10 / MOD 37,36 variants.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Incremental mod-97 remainder over an alphanumeric byte slice, letters
/// expanded to their two-digit value (`A` = 10 … `Z` = 35). Returns `None`
/// on the first byte outside `[0-9A-Z]`.
///
/// A 64-bit accumulator reduced once per character makes the original's
/// fixed-width chunk buffering unnecessary:
/// `(a * 10^k + b) mod 97 == ((a mod 97) * 10^k + b) mod 97`.
pub fn mod97_remainder(bytes: &[u8]) -> Option<u64> {
    let mut rem: u64 = 0;
    for &b in bytes {
        match b {
            b'0'..=b'9' => rem = (rem * 10 + u64::from(b - b'0')) % 97,
            b'A'..=b'Z' => rem = (rem * 100 + u64::from(b - b'A') + 10) % 97,
            _ => return None,
        }
    }
    Some(rem)
}

/// Generic ISO 7064 MOD 97-10 check: alphanumeric body followed by two
/// decimal check digits; the remainder over the whole string must be 1.
pub fn check_mod97_10(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 3 {
        return Err(Malformed::Length.into());
    }
    let (body, check) = bytes.split_at(bytes.len() - 2);
    if !check.iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }
    let rem = mod97_remainder(bytes).ok_or(Malformed::Charset)?;
    if rem == 1 {
        return Ok(());
    }
    // two-digit value that would close the body to remainder 1
    let body_rem = mod97_remainder(body).unwrap_or(0);
    let expected = (98 - (body_rem * 100) % 97) as u8;
    Err(CheckError::mismatch2([expected / 10 + b'0', expected % 10 + b'0']))
}

/// ISO 7064 MOD 11-2 check value for a digit sequence: fold
/// `(sum + d) * 2 mod 11`, then `(12 - sum) mod 11`. Returns 0–10, where
/// 10 is rendered as `X` by callers.
pub fn mod11_2_check(digits: impl Iterator<Item = u8>) -> u8 {
    let mut sum = 0u32;
    for d in digits {
        debug_assert!(d < 10, "mod 11-2 fold fed a non-digit value {d}");
        sum = ((sum + u32::from(d)) * 2) % 11;
    }
    ((12 - sum) % 11) as u8
}

/// ISO 7064 MOD 11,10 hybrid check digit (German IdNr, Croatian OIB,
/// German VAT-ID). Returns 0–9.
pub fn mod11_10_check(digits: impl Iterator<Item = u8>) -> u8 {
    let mut prod = 10u32;
    for d in digits {
        debug_assert!(d < 10, "mod 11,10 fold fed a non-digit value {d}");
        let mut s = (prod + u32::from(d)) % 10;
        if s == 0 {
            s = 10;
        }
        prod = (2 * s) % 11;
    }
    ((11 - prod) % 10) as u8
}

/// ISO 7064 MOD 37,36 hybrid check value over base-36 values (GRid,
/// ISAN family). Returns 0–35, to be rendered via
/// [`base36_char`](super::alphabet::base36_char).
pub fn mod37_36_check(values: impl Iterator<Item = u8>) -> u8 {
    let mut p = 36u32;
    for v in values {
        debug_assert!(v < 36, "mod 37,36 fold fed an out-of-range value {v}");
        p += u32::from(v);
        if p > 36 {
            p -= 36;
        }
        p = (p * 2) % 37;
    }
    ((37 - p) % 36) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_expansion() {
        // "AB12" expands to 101112; 101112 mod 97 == 32
        assert_eq!(mod97_remainder(b"AB12"), Some(101_112 % 97));
        assert_eq!(mod97_remainder(b"ab12"), None);
        assert_eq!(mod97_remainder(b""), Some(0));
    }

    #[test]
    fn generic_mod97() {
        // 79444 mod 97 == 1, i.e. check digits for "794" are 44
        assert_eq!(check_mod97_10("79444"), Ok(()));
        let err = check_mod97_10("79400").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"44");
    }

    #[test]
    fn mod97_rejects_trailing_letters() {
        assert_eq!(check_mod97_10("794AB"), Err(Malformed::Charset.into()));
    }

    #[test]
    fn mod11_2_known_value() {
        // ISNI block 0000 0001 2281 955 closes with X (value 10)
        let digits = b"000000012281955".iter().map(|b| b - b'0');
        assert_eq!(mod11_2_check(digits), 10);
    }

    #[test]
    fn mod11_10_known_values() {
        // German IdNr test value 86095742719
        let digits = b"8609574271".iter().map(|b| b - b'0');
        assert_eq!(mod11_10_check(digits), 9);
        // German VAT-ID 136695976
        let digits = b"13669597".iter().map(|b| b - b'0');
        assert_eq!(mod11_10_check(digits), 6);
    }

    #[test]
    fn mod37_36_known_value() {
        // GRid A1-2425G-ABC1234002-M: body closes with M (value 22)
        let values = b"A12425GABC1234002"
            .iter()
            .map(|&b| super::super::alphabet::base36(b).unwrap());
        assert_eq!(mod37_36_check(values), 22);
    }
}
