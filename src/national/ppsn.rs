//! PPS number, Ireland's Personal Public Service number.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate a PPSN: seven digits, a check letter, and an optional second
/// letter. Digits are weighted 8 … 2; under the post-2013 scheme a
/// second letter in `A`–`V` contributes 9 × its ordinal (a trailing `W`
/// is the legacy marker and does not count). The check letter encodes
/// the sum mod 23, with `A` = 1 … `W` = 23 ≡ 0.
pub fn check_ppsn(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 8 || bytes.len() > 10 {
        return Err(Malformed::Length.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..7].iter().enumerate() {
        let d = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        sum += (8 - i as u32) * u32::from(d);
    }
    if !bytes[7].is_ascii_uppercase() {
        return Err(Malformed::Charset.into());
    }

    if bytes.len() > 8 {
        let mut i = 8;
        if bytes[i] == b'/' {
            i += 1;
        }
        if i + 1 != bytes.len() {
            return Err(Malformed::Length.into());
        }
        match bytes[i] {
            b'A'..=b'V' => sum += 9 * u32::from(bytes[i] - b'A' + 1),
            b'W' | b' ' => {}
            _ => return Err(Malformed::Charset.into()),
        }
    }

    let r = sum % 23;
    let expected = if r == 0 { b'W' } else { b'A' + r as u8 - 1 };
    if expected == bytes[7] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
