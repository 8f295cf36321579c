//! ISO 9362 Business Identifier Code (SWIFT BIC). Shape-only: the scheme
//! carries no check digit.

use crate::outcome::{CheckResult, Malformed};

use super::countries::is_known_country_code;

/// Validate a BIC: four-letter institution code, ISO 3166 country code,
/// two alphanumeric location characters, optional three-character branch
/// code. The 9/12-character FIN-address variants (an extra routing
/// character) are accepted as well.
pub fn check_bic(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if !matches!(bytes.len(), 8 | 9 | 11 | 12) {
        return Err(Malformed::Length.into());
    }

    if !bytes[..4].iter().all(u8::is_ascii_uppercase) {
        return Err(Malformed::Charset.into());
    }
    let country = &input[4..6];
    if !is_known_country_code(country) {
        return Err(Malformed::Prefix.into());
    }
    for &b in &bytes[6..] {
        if !b.is_ascii_digit() && !b.is_ascii_uppercase() {
            return Err(Malformed::Charset.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_bics() {
        assert_eq!(check_bic("DEUTDEFF"), Ok(()));
        assert_eq!(check_bic("COBADEFFXXX"), Ok(()));
        assert_eq!(check_bic("NWBKGB2L"), Ok(()));
        assert_eq!(check_bic("MARKDEFF"), Ok(()));
    }

    #[test]
    fn unknown_country() {
        assert_eq!(check_bic("DEUTXZFF"), Err(Malformed::Prefix.into()));
    }

    #[test]
    fn lowercase_institution() {
        assert_eq!(check_bic("deutDEFF"), Err(Malformed::Charset.into()));
    }

    #[test]
    fn digit_in_institution_code() {
        assert_eq!(check_bic("DEU7DEFF"), Err(Malformed::Charset.into()));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(check_bic("DEUTDEF"), Err(Malformed::Length.into()));
        assert_eq!(check_bic("COBADEFFXX"), Err(Malformed::Length.into()));
        assert_eq!(check_bic("COBADEFFXXXX"), Err(Malformed::Length.into()));
    }
}
