//! EU VAT identification numbers: per-member-state shape rules with
//! check digit validation where the scheme defines one.

use crate::outcome::{CheckResult, Malformed};

use super::checksum::{check_bevatid, check_devatid, check_dkvatid, check_fivatid, check_frvatid};

fn digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

fn alnum(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

fn shape(ok: bool, kind: Malformed) -> CheckResult {
    if ok { Ok(()) } else { Err(kind.into()) }
}

type CountryCheck = fn(&str) -> CheckResult;

/// Per-member-state validators over the number part (country prefix
/// stripped). States whose check digit algorithm is implemented get the
/// full check; the rest are validated structurally.
static COUNTRIES: &[(&str, CountryCheck)] = &[
    ("AT", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(b[0] == b'U' && digits(&b[1..]), Malformed::Charset)
    }),
    ("BE", |n| check_bevatid(n)),
    ("BG", |n| {
        let b = n.as_bytes();
        if b.len() != 9 && b.len() != 10 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("CY", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(digits(&b[..8]) && b[8].is_ascii_uppercase(), Malformed::Charset)
    }),
    ("CZ", |n| {
        let b = n.as_bytes();
        if !(8..=10).contains(&b.len()) {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("DE", |n| check_devatid(n)),
    ("DK", |n| check_dkvatid(n)),
    ("EE", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("EL", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("ES", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(alnum(b), Malformed::Charset)
    }),
    ("FI", |n| check_fivatid(n)),
    ("FR", |n| check_frvatid(n)),
    ("HR", |n| crate::national::check_oib(n)),
    ("HU", |n| {
        let b = n.as_bytes();
        if b.len() != 8 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("IE", |n| {
        let b = n.as_bytes();
        if b.len() != 8 && b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(alnum(b), Malformed::Charset)
    }),
    ("IT", |n| {
        let b = n.as_bytes();
        if b.len() != 11 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("LT", |n| {
        let b = n.as_bytes();
        if b.len() != 9 && b.len() != 12 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("LU", |n| {
        let b = n.as_bytes();
        if b.len() != 8 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("LV", |n| {
        let b = n.as_bytes();
        if b.len() != 11 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("MT", |n| {
        let b = n.as_bytes();
        if b.len() != 8 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("NL", |n| {
        let b = n.as_bytes();
        if b.len() != 12 {
            return Err(Malformed::Length.into());
        }
        shape(
            digits(&b[..9]) && b[9] == b'B' && digits(&b[10..]),
            Malformed::Charset,
        )
    }),
    ("PL", |n| {
        let b = n.as_bytes();
        if b.len() != 10 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("PT", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("RO", |n| {
        let b = n.as_bytes();
        if !(2..=10).contains(&b.len()) {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("SE", |n| {
        let b = n.as_bytes();
        if b.len() != 12 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("SI", |n| {
        let b = n.as_bytes();
        if b.len() != 8 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    ("SK", |n| {
        let b = n.as_bytes();
        if b.len() != 10 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
    // Northern Ireland kept the GB format after Brexit
    ("XI", |n| {
        let b = n.as_bytes();
        if b.len() != 9 {
            return Err(Malformed::Length.into());
        }
        shape(digits(b), Malformed::Charset)
    }),
];

/// Validate an EU VAT identification number, two-letter member-state
/// prefix included (e.g. `DE136695976`).
///
/// Member states with an implemented check digit scheme (DE, BE, DK, FI,
/// FR, HR) get full checksum validation; the rest are validated against
/// their structural format.
pub fn check_euvatid(input: &str) -> CheckResult {
    let trimmed = input.trim();
    if trimmed.len() < 4 {
        return Err(Malformed::Length.into());
    }
    if !trimmed.as_bytes()[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(Malformed::Prefix.into());
    }
    let (country, number) = trimmed.split_at(2);

    for &(code, check) in COUNTRIES {
        if code == country {
            return check(number);
        }
    }
    Err(Malformed::Prefix.into())
}
