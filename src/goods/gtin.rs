//! GS1 article numbers: GTIN-8/12/13/14, GLN and SSCC.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate a GS1 number: 8–14 digits (GTIN family, GLN) or 18 digits
/// (SSCC). Weights alternate 3, 1 from the digit next to the check
/// digit; the weighted total plus the check digit must be divisible
/// by 10.
pub fn check_gtin(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if !((8..=14).contains(&bytes.len()) || bytes.len() == 18) {
        return Err(Malformed::Length.into());
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..bytes.len() - 1].iter().rev().enumerate() {
        let w = if i % 2 == 0 { 3 } else { 1 };
        sum += w * u32::from(b - b'0');
    }
    let expected = ((10 - sum % 10) % 10) as u8 + b'0';
    if expected == bytes[bytes.len() - 1] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}
