//! Payment card primary account numbers: Luhn check plus issuer
//! recognition from the IIN prefix.

use crate::outcome::{CheckError, CheckResult, Malformed};

/// Card scheme recognized from the issuer identification number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum CardIssuer {
    Amex,
    Bankcard,
    ChinaUnionPay,
    Dankort,
    DinersClubCarteBlanche,
    DinersClubEnroute,
    DinersClubInternational,
    Discover,
    InstaPayment,
    InterPayment,
    Jcb,
    Laser,
    Maestro,
    Mastercard,
    Solo,
    Switch,
    Uatp,
    Visa,
    VisaElectron,
    Unknown,
}

impl CardIssuer {
    /// Human-readable scheme name.
    pub fn name(self) -> &'static str {
        match self {
            CardIssuer::Amex => "American Express",
            CardIssuer::Bankcard => "Bankcard",
            CardIssuer::ChinaUnionPay => "China UnionPay",
            CardIssuer::Dankort => "Dankort",
            CardIssuer::DinersClubCarteBlanche => "Diners Club Carte Blanche",
            CardIssuer::DinersClubEnroute => "Diners Club enRoute",
            CardIssuer::DinersClubInternational => "Diners Club International",
            CardIssuer::Discover => "Discover Card",
            CardIssuer::InstaPayment => "InstaPayment",
            CardIssuer::InterPayment => "InterPayment",
            CardIssuer::Jcb => "JCB",
            CardIssuer::Laser => "Laser",
            CardIssuer::Maestro => "Maestro",
            CardIssuer::Mastercard => "MasterCard",
            CardIssuer::Solo => "Solo",
            CardIssuer::Switch => "Switch",
            CardIssuer::Uatp => "UATP",
            CardIssuer::Visa => "Visa",
            CardIssuer::VisaElectron => "Visa Electron",
            CardIssuer::Unknown => "unknown",
        }
    }
}

fn prefix_value(digits: &[u8], n: usize) -> u32 {
    digits.iter().take(n).fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}

/// Recognize the issuing scheme from digit values (most specific prefix
/// first). Length rules are deliberately loose; the shape check in
/// [`check_card`] already bounds the total length.
pub fn issuer(digits: &[u8]) -> CardIssuer {
    if digits.len() < 6 {
        return CardIssuer::Unknown;
    }
    let p2 = prefix_value(digits, 2);
    let p3 = prefix_value(digits, 3);
    let p4 = prefix_value(digits, 4);
    let p6 = prefix_value(digits, 6);

    match () {
        _ if p6 == 560_221 || p6 == 560_222 || p6 == 560_223 || p6 == 560_224
            || p6 == 560_225 || p4 == 5610 => CardIssuer::Bankcard,
        _ if p6 == 417_500 || p4 == 4026 || p4 == 4508 || p4 == 4844 || p4 == 4913
            || p4 == 4917 => CardIssuer::VisaElectron,
        _ if p6 == 564_182 || p6 == 633_110 || p4 == 4903 || p4 == 4905 || p4 == 4911
            || p4 == 4936 || p4 == 6333 || p4 == 6759 => CardIssuer::Switch,
        _ if p4 == 5019 => CardIssuer::Dankort,
        _ if p4 == 6304 || p4 == 6706 || p4 == 6709 || p4 == 6771 => CardIssuer::Laser,
        _ if p4 == 6334 || p4 == 6767 => CardIssuer::Solo,
        _ if p4 == 2014 || p4 == 2149 => CardIssuer::DinersClubEnroute,
        _ if p4 == 6011 || (622_126..=622_925).contains(&p6) || (644..=649).contains(&p3)
            || p2 == 65 => CardIssuer::Discover,
        _ if (637..=639).contains(&p3) => CardIssuer::InstaPayment,
        _ if p3 == 636 => CardIssuer::InterPayment,
        _ if (3528..=3589).contains(&p4) => CardIssuer::Jcb,
        _ if (300..=305).contains(&p3) => CardIssuer::DinersClubCarteBlanche,
        _ if p2 == 36 => CardIssuer::DinersClubInternational,
        _ if p2 == 34 || p2 == 37 => CardIssuer::Amex,
        _ if p2 == 62 => CardIssuer::ChinaUnionPay,
        _ if (51..=55).contains(&p2) || (2221..=2720).contains(&p4) => CardIssuer::Mastercard,
        _ if p2 == 50 || (56..=69).contains(&p2) => CardIssuer::Maestro,
        _ if digits[0] == 4 => CardIssuer::Visa,
        _ if digits[0] == 1 => CardIssuer::Uatp,
        _ => CardIssuer::Unknown,
    }
}

/// Validate a payment card number: 12–19 digits after removing the spaces
/// of the embossed display form, Luhn-secured final digit.
pub fn check_card(input: &str) -> CheckResult {
    let bytes = input.as_bytes();
    if bytes.len() < 12 || bytes.len() > 19 + 4 {
        return Err(Malformed::Length.into());
    }

    let mut digits = [0u8; 19];
    let mut n = 0usize;
    for &b in bytes {
        match b {
            b' ' => continue,
            b'0'..=b'9' => {
                if n == digits.len() {
                    return Err(Malformed::Length.into());
                }
                digits[n] = b - b'0';
                n += 1;
            }
            _ => return Err(Malformed::Charset.into()),
        }
    }
    if n < 12 {
        return Err(Malformed::Length.into());
    }
    let digits = &digits[..n];

    let expected = crate::algo::luhn_check_digit(&digits[..n - 1]);
    if expected == digits[n - 1] {
        Ok(())
    } else {
        Err(CheckError::mismatch1(expected + b'0'))
    }
}
