//! CPF, Brazil's natural-person taxpayer number.

use crate::outcome::{CheckError, CheckResult, Malformed};

fn cpf_digit(digits: &[u8], start_weight: u32) -> u8 {
    let mut sum = 0u32;
    let mut w = start_weight;
    for &d in digits {
        sum += w * u32::from(d);
        w -= 1;
    }
    let r = sum % 11;
    if r < 2 { 0 } else { (11 - r) as u8 }
}

/// Validate a CPF: eleven digits carrying two cascaded weighted mod-11
/// check digits; the dotted display form `000.000.000-00` is accepted.
pub fn check_cpf(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 11 || bytes.len() > 14 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 11];
    let mut n = 0usize;
    for &b in bytes {
        match b {
            b'.' => {
                if !matches!(n, 3 | 6) {
                    return Err(Malformed::Separator.into());
                }
            }
            b'-' => {
                if n != 9 {
                    return Err(Malformed::Separator.into());
                }
            }
            _ => {
                if n == 11 {
                    return Err(Malformed::Length.into());
                }
                digits[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
                n += 1;
            }
        }
    }
    if n != 11 {
        return Err(Malformed::Length.into());
    }

    let d1 = cpf_digit(&digits[..9], 10);
    let d2 = cpf_digit(&digits[..10], 11);
    if d1 == digits[9] && d2 == digits[10] {
        Ok(())
    } else {
        // d2 depends on the correct d1
        let mut fixed = digits;
        fixed[9] = d1;
        let d2 = cpf_digit(&fixed[..10], 11);
        Err(CheckError::mismatch2([d1 + b'0', d2 + b'0']))
    }
}
