//! Global Release Identifier (GRid) for electronic music releases.

use crate::algo::alphabet::{base36, base36_char};
use crate::algo::mod37_36_check;
use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate a GRid: identifier scheme (`A1`), five-character issuer code,
/// ten-character release number, ISO 7064 MOD 37,36 check character over
/// base 36. Hyphens are permitted between the groups
/// (`A1-2425G-ABC1234002-M`).
pub fn check_grid(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 18 || bytes.len() > 21 {
        return Err(Malformed::Length.into());
    }

    let mut sig = [0u8; 18];
    let mut n = 0usize;
    for &b in bytes {
        if b == b'-' {
            if !matches!(n, 2 | 7 | 17) {
                return Err(Malformed::Separator.into());
            }
            continue;
        }
        if n == 18 {
            return Err(Malformed::Length.into());
        }
        sig[n] = b;
        n += 1;
    }
    if n != 18 {
        return Err(Malformed::Length.into());
    }

    let mut values = [0u8; 17];
    for (slot, &b) in values.iter_mut().zip(&sig[..17]) {
        *slot = base36(b).ok_or(Malformed::Charset)?;
    }
    if base36(sig[17]).is_none() {
        return Err(Malformed::Charset.into());
    }

    let expected = base36_char(mod37_36_check(values.into_iter()));
    if expected == sig[17] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_example() {
        assert_eq!(check_grid("A12425GABC1234002M"), Ok(()));
        assert_eq!(check_grid("A1-2425G-ABC1234002-M"), Ok(()));
    }

    #[test]
    fn wrong_check_character() {
        let err = check_grid("A12425GABC1234002A").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"M");
    }

    #[test]
    fn misplaced_hyphen() {
        assert_eq!(
            check_grid("A124-25GABC1234002M"),
            Err(Malformed::Separator.into())
        );
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_grid("A12425GABC123400M"), Err(Malformed::Length.into()));
        assert_eq!(
            check_grid("A12425GABC1234002MM"),
            Err(Malformed::Length.into())
        );
    }

    #[test]
    fn lowercase_is_malformed() {
        assert_eq!(
            check_grid("A12425GABC1234002m"),
            Err(Malformed::Charset.into())
        );
    }
}
