//! Cross-scheme conformance suite: published test vectors for every
//! validator, plus the canonical failure scenarios.

use pruefziffer::{CheckError, Malformed};

// ── Canonical scenarios ──────────────────────────────────────────────────────

#[test]
fn luhn_canonical() {
    assert_eq!(pruefziffer::algo::check_luhn("79927398713"), Ok(()));
    let err = pruefziffer::algo::check_luhn("79927398710").unwrap_err();
    assert_eq!(err.expected().unwrap().as_str(), "3");
}

#[test]
fn iban_canonical() {
    assert_eq!(pruefziffer::finance::check_iban("GB82WEST12345698765432"), Ok(()));
    // wrong check digits for the same BBAN
    let err = pruefziffer::finance::check_iban("GB00WEST12345698765432").unwrap_err();
    assert_eq!(err.expected().unwrap().as_str(), "82");
}

#[test]
fn isin_canonical() {
    assert_eq!(pruefziffer::finance::check_isin("US0378331005"), Ok(()));
    assert_eq!(
        pruefziffer::finance::check_isin("US03783"),
        Err(CheckError::Malformed(Malformed::Length))
    );
}

// ── Conformant vectors across every scheme ───────────────────────────────────

#[test]
fn all_schemes_accept_known_good_identifiers() {
    let vectors: &[(&str, fn(&str) -> pruefziffer::CheckResult)] = &[
        ("79927398713", pruefziffer::algo::check_luhn),
        ("2363", pruefziffer::algo::check_verhoeff),
        ("5724", pruefziffer::algo::check_damm10),
        ("deadbeefa", pruefziffer::algo::check_damm16),
        ("79444", pruefziffer::algo::check_mod97_10),
        ("US0378331005", pruefziffer::finance::check_isin),
        ("037833100", pruefziffer::finance::check_cusip),
        ("B0YBKJ7", pruefziffer::finance::check_sedol),
        ("BBG000BLNNH6", pruefziffer::finance::check_figi),
        ("BASF11", pruefziffer::finance::check_wkn),
        ("DE89370400440532013000", pruefziffer::finance::check_iban),
        ("HWUPKR0MPOU8FGXBT394", pruefziffer::finance::check_lei),
        ("COBADEFFXXX", pruefziffer::finance::check_bic),
        ("4111111111111111", pruefziffer::finance::check_card),
        ("021000021", pruefziffer::finance::check_abartn),
        ("978-3-16-148410-0", pruefziffer::publishing::check_isbn),
        ("0378-5955", pruefziffer::publishing::check_issn),
        ("M-2306-7118-7", pruefziffer::publishing::check_ismn),
        ("0000 0001 2281 955X", pruefziffer::publishing::check_isni),
        ("96385074", pruefziffer::goods::check_gtin),
        ("7732-18-5", pruefziffer::goods::check_cas),
        ("A1-2425G-ABC1234002-M", pruefziffer::goods::check_grid),
        ("490154203237518", pruefziffer::goods::check_imei),
        ("IMO 9074729", pruefziffer::goods::check_imo),
        ("1M8GDM9AXKP042788", pruefziffer::goods::check_vin),
        ("CSQU3054383", pruefziffer::goods::check_bicc),
        ("2345 6789 0124", pruefziffer::national::check_aadhaar),
        ("111.444.777-35", pruefziffer::national::check_cpf),
        ("86 095 742 719", pruefziffer::national::check_idnr),
        ("10201600123S", pruefziffer::national::check_iposan),
        ("010130-2989", pruefziffer::national::check_kennitala),
        ("ZAC5361", pruefziffer::national::check_nhi),
        ("9434765919", pruefziffer::national::check_nhs),
        ("69435151530", pruefziffer::national::check_oib),
        ("1234567FA", pruefziffer::national::check_ppsn),
        ("10000000146", pruefziffer::national::check_tckimlik),
        ("123 456 782", pruefziffer::national::check_tfn),
        ("H801200001001", pruefziffer::national::check_upn),
        ("DE136695976", pruefziffer::euvat::check_euvatid),
        ("FR40303265045", pruefziffer::euvat::check_frvatid),
    ];

    for (input, check) in vectors {
        assert_eq!(check(input), Ok(()), "expected {input:?} to be conformant");
    }
}

// ── Correction idempotence on concrete vectors ───────────────────────────────

/// For a trailing-check-digit scheme, substituting the reported check
/// character(s) must produce a conformant identifier.
fn assert_trailing_correction(check: fn(&str) -> pruefziffer::CheckResult, broken: &str) {
    let err = check(broken).unwrap_err();
    let expected = err.expected().expect("broken vector should be correctable");
    let fixed = format!(
        "{}{}",
        &broken[..broken.len() - expected.as_str().len()],
        expected
    );
    assert_eq!(check(&fixed), Ok(()), "correcting {broken:?} to {fixed:?}");
}

#[test]
fn corrections_validate() {
    assert_trailing_correction(pruefziffer::algo::check_luhn, "79927398710");
    assert_trailing_correction(pruefziffer::algo::check_verhoeff, "2360");
    assert_trailing_correction(pruefziffer::finance::check_isin, "US0378331000");
    assert_trailing_correction(pruefziffer::finance::check_lei, "5493007MHB84DD0ZWV18");
    assert_trailing_correction(pruefziffer::finance::check_cusip, "594918100");
    assert_trailing_correction(pruefziffer::finance::check_sedol, "B0YBKJ0");
    assert_trailing_correction(pruefziffer::goods::check_gtin, "4006381333930");
    assert_trailing_correction(pruefziffer::goods::check_bicc, "CSQU3054380");
    assert_trailing_correction(pruefziffer::national::check_nhs, "9434765910");
    assert_trailing_correction(pruefziffer::national::check_oib, "69435151539");
    assert_trailing_correction(pruefziffer::national::check_cpf, "11144477700");
    assert_trailing_correction(pruefziffer::national::check_tckimlik, "10000000100");
}

#[test]
fn iban_correction_validates() {
    // the check digits sit at positions 3–4, not at the tail
    let err = pruefziffer::finance::check_iban("GB11WEST12345698765432").unwrap_err();
    let expected = err.expected().unwrap().as_str().to_owned();
    let fixed = format!("GB{expected}WEST12345698765432");
    assert_eq!(pruefziffer::finance::check_iban(&fixed), Ok(()));
}

#[test]
fn vin_correction_validates() {
    // check digit at position 9
    let err = pruefziffer::goods::check_vin("1M8GDM9A1KP042788").unwrap_err();
    let expected = err.expected().unwrap().as_str().to_owned();
    let fixed = format!("1M8GDM9A{expected}KP042788");
    assert_eq!(pruefziffer::goods::check_vin(&fixed), Ok(()));
}

#[test]
fn upn_correction_validates() {
    // check letter leads
    let err = pruefziffer::national::check_upn("Z801200001001").unwrap_err();
    let expected = err.expected().unwrap().as_str().to_owned();
    let fixed = format!("{expected}801200001001");
    assert_eq!(pruefziffer::national::check_upn(&fixed), Ok(()));
}

// ── Boundary lengths ─────────────────────────────────────────────────────────

#[test]
fn off_by_one_lengths_are_malformed() {
    let fixed_length: &[(fn(&str) -> pruefziffer::CheckResult, &str)] = &[
        (pruefziffer::finance::check_isin, "US0378331005"),
        (pruefziffer::finance::check_lei, "HWUPKR0MPOU8FGXBT394"),
        (pruefziffer::finance::check_sedol, "B0YBKJ7"),
        (pruefziffer::finance::check_figi, "BBG000BLNNH6"),
        (pruefziffer::finance::check_abartn, "021000021"),
        (pruefziffer::goods::check_vin, "1M8GDM9AXKP042788"),
        (pruefziffer::goods::check_bicc, "CSQU3054383"),
        (pruefziffer::national::check_nhs, "9434765919"),
        (pruefziffer::national::check_oib, "69435151530"),
        (pruefziffer::national::check_tckimlik, "10000000146"),
        (pruefziffer::national::check_upn, "H801200001001"),
        (pruefziffer::national::check_nhi, "ZAC5361"),
    ];

    for (check, good) in fixed_length {
        let shorter = &good[..good.len() - 1];
        let longer = format!("{good}0");
        assert_eq!(
            check(shorter),
            Err(CheckError::Malformed(Malformed::Length)),
            "{shorter:?} should be malformed"
        );
        assert_eq!(
            check(&longer),
            Err(CheckError::Malformed(Malformed::Length)),
            "{longer:?} should be malformed"
        );
    }
}

// ── Malformed inputs never reach the fold ────────────────────────────────────

#[test]
fn garbage_is_malformed_not_nonconformant() {
    // '!' = '1' with bit 4 flipped; an unchecked `^ b'0'` wraparound
    // would treat it as a digit
    let inputs = [
        "7992739871!",
        "US03783310!5",
        "943476591!",
        "0614141000!18",
    ];
    for input in inputs {
        for checker in pruefziffer::registry::checkers() {
            if let Err(CheckError::Mismatch { .. }) = (checker.check)(input) {
                // a mismatch implies the fold ran over garbage
                panic!("{} folded {input:?}", checker.name);
            }
        }
    }
}
