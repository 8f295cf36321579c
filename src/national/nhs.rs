//! NHS number, the UK's health service identifier.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Validate an NHS number: ten digits, the first nine weighted 10 … 2,
/// check digit `11 - residue` (11 maps to 0; numbers with residue 1 are
/// never issued).
pub fn check_nhs(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(Malformed::Length.into());
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Malformed::Charset.into());
    }

    let mut sum = 0u32;
    for (i, &b) in bytes[..9].iter().enumerate() {
        sum += (10 - i as u32) * u32::from(b - b'0');
    }
    let check = 11 - sum % 11;
    if check == 10 {
        return Err(CheckError::Failed);
    }
    let expected = if check == 11 { 0u8 } else { check as u8 } + b'0';
    if expected == bytes[9] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_test_numbers() {
        assert_eq!(check_nhs("9434765919"), Ok(()));
        assert_eq!(check_nhs("4010232137"), Ok(()));
        assert_eq!(check_nhs("9434765870"), Ok(()));
    }

    #[test]
    fn wrong_check_digit() {
        let err = check_nhs("9434765910").unwrap_err();
        assert_eq!(err.expected().unwrap().as_bytes(), b"9");
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_nhs("943476591"), Err(Malformed::Length.into()));
        assert_eq!(check_nhs("94347659199"), Err(Malformed::Length.into()));
    }

    #[test]
    fn non_digits_rejected() {
        assert_eq!(check_nhs("943476591X"), Err(Malformed::Charset.into()));
    }
}
