//! Per-country VAT-ID check digit algorithms. The two-letter country
//! prefix is optional here, as callers may have stripped it already;
//! [`check_euvatid`](super::check_euvatid) requires it.

use crate::algo::mod11_10_check;
use crate::outcome::{CheckError, CheckResult, Malformed};

fn strip_prefix<'a>(bytes: &'a [u8], prefix: &[u8]) -> &'a [u8] {
    let rest = bytes.strip_prefix(prefix).unwrap_or(bytes);
    rest.strip_prefix(b" ").unwrap_or(rest)
}

/// Collect digits, tolerating the given separator between them.
fn collect_digits<const N: usize>(bytes: &[u8], sep: u8) -> Result<([u8; N], usize), Malformed> {
    let mut out = [0u8; N];
    let mut n = 0usize;
    let mut prev_sep = true;
    for &b in bytes {
        if b == sep {
            if prev_sep {
                return Err(Malformed::Separator);
            }
            prev_sep = true;
            continue;
        }
        if n == N {
            return Err(Malformed::Length);
        }
        out[n] = crate::algo::alphabet::digit(b).ok_or(Malformed::Charset)?;
        n += 1;
        prev_sep = false;
    }
    if prev_sep && n > 0 {
        return Err(Malformed::Separator);
    }
    Ok((out, n))
}

/// German USt-IdNr.: nine digits, no leading zero, ISO 7064 MOD 11,10
/// check digit.
pub fn check_devatid(input: &str) -> CheckResult {
    let bytes = strip_prefix(input.as_bytes(), b"DE");
    let (digits, n) = collect_digits::<9>(bytes, b' ')?;
    if n != 9 {
        return Err(Malformed::Length.into());
    }
    if digits[0] == 0 {
        return Err(Malformed::Prefix.into());
    }

    let expected = mod11_10_check(digits[..8].iter().copied());
    if expected == digits[8] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}

/// Belgian BTW/TVA number: ten digits (nine in the legacy form); the
/// last two equal `97 − (leading digits mod 97)`. Dots in the
/// `0999.999.999` display form are tolerated.
pub fn check_bevatid(input: &str) -> CheckResult {
    let bytes = strip_prefix(input.as_bytes(), b"BE");
    let (digits, n) = collect_digits::<10>(bytes, b'.')?;
    if n != 9 && n != 10 {
        return Err(Malformed::Length.into());
    }

    let value: u64 = digits[..n - 2].iter().fold(0, |acc, &d| acc * 10 + u64::from(d));
    let expected = (97 - value % 97) as u8;
    let expected = [expected / 10 + b'0', expected % 10 + b'0'];
    if expected == [digits[n - 2] + b'0', digits[n - 1] + b'0'] {
        Ok(())
    } else {
        Err(CheckError::mismatch2(expected))
    }
}

/// Danish CVR number: eight digits weighted 2, 7, 6, 5, 4, 3, 2, 1; the
/// total must be divisible by 11.
pub fn check_dkvatid(input: &str) -> CheckResult {
    let bytes = strip_prefix(input.as_bytes(), b"DK");
    let (digits, n) = collect_digits::<8>(bytes, b' ')?;
    if n != 8 {
        return Err(Malformed::Length.into());
    }

    const WEIGHTS: [u32; 8] = [2, 7, 6, 5, 4, 3, 2, 1];
    let sum: u32 = digits.iter().zip(WEIGHTS).map(|(&d, w)| u32::from(d) * w).sum();
    if sum % 11 == 0 {
        return Ok(());
    }
    // the final digit has weight 1, so it closes the sum directly
    let body = sum - u32::from(digits[7]);
    let expected = (11 - body % 11) % 11;
    if expected > 9 {
        return Err(CheckError::Failed);
    }
    Err(CheckError::mismatch1(expected as u8 + b'0'))
}

/// Finnish ALV number: eight digits, the first seven weighted
/// 7, 9, 10, 5, 8, 4, 2; check digit `11 − residue` (residue 1 numbers
/// are never issued).
pub fn check_fivatid(input: &str) -> CheckResult {
    let bytes = strip_prefix(input.as_bytes(), b"FI");
    let (digits, n) = collect_digits::<8>(bytes, b' ')?;
    if n != 8 {
        return Err(Malformed::Length.into());
    }

    const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];
    let sum: u32 = digits[..7].iter().zip(WEIGHTS).map(|(&d, w)| u32::from(d) * w).sum();
    let r = sum % 11;
    if r == 1 {
        return Err(CheckError::Failed);
    }
    let expected = if r == 0 { 0u8 } else { (11 - r) as u8 };
    if expected == digits[7] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}

/// French TVA number: two-digit key followed by the nine-digit SIREN;
/// key = `(12 + 3·(SIREN mod 97)) mod 97`.
pub fn check_frvatid(input: &str) -> CheckResult {
    let bytes = strip_prefix(input.as_bytes(), b"FR");
    let (digits, n) = collect_digits::<11>(bytes, b' ')?;
    if n != 11 {
        return Err(Malformed::Length.into());
    }

    let key = u32::from(digits[0]) * 10 + u32::from(digits[1]);
    let siren: u64 = digits[2..].iter().fold(0, |acc, &d| acc * 10 + u64::from(d));
    let expected = ((12 + 3 * (siren % 97)) % 97) as u8;
    let expected_pair = [expected / 10 + b'0', expected % 10 + b'0'];
    if u32::from(expected) == key {
        Ok(())
    } else {
        Err(CheckError::mismatch2(expected_pair))
    }
}
