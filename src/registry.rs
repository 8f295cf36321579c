//! Static checker registry and the all-schemes scan.
//!
//! The registry is an ordered, immutable list of `(name, fn)` pairs —
//! every checker is independently callable and carries no shared state,
//! so scanning is safe from any number of threads. Selection policy
//! (which match to prefer for an ambiguous input) belongs to the caller.

use serde::Serialize;

use crate::outcome::{CheckError, CheckResult};

/// A named validator.
#[derive(Clone, Copy)]
pub struct Checker {
    /// Scheme name, e.g. `"ISIN"`.
    pub name: &'static str,
    /// The validator function.
    pub check: fn(&str) -> CheckResult,
}

/// All registered checkers, generic algorithms last (they accept the
/// widest range of inputs and make the weakest claim).
pub fn checkers() -> &'static [Checker] {
    static CHECKERS: &[Checker] = &[
        Checker { name: "ISIN", check: crate::finance::check_isin },
        Checker { name: "CUSIP", check: crate::finance::check_cusip },
        Checker { name: "SEDOL", check: crate::finance::check_sedol },
        Checker { name: "FIGI", check: crate::finance::check_figi },
        Checker { name: "WKN", check: crate::finance::check_wkn },
        Checker { name: "IBAN", check: crate::finance::check_iban },
        Checker { name: "LEI", check: crate::finance::check_lei },
        Checker { name: "BIC", check: crate::finance::check_bic },
        Checker { name: "credit card", check: crate::finance::check_card },
        Checker { name: "ABA RTN", check: crate::finance::check_abartn },
        Checker { name: "ISBN", check: crate::publishing::check_isbn },
        Checker { name: "ISSN", check: crate::publishing::check_issn },
        Checker { name: "ISMN", check: crate::publishing::check_ismn },
        Checker { name: "ISNI", check: crate::publishing::check_isni },
        Checker { name: "GTIN", check: crate::goods::check_gtin },
        Checker { name: "CAS RN", check: crate::goods::check_cas },
        Checker { name: "GRid", check: crate::goods::check_grid },
        Checker { name: "IMEI", check: crate::goods::check_imei },
        Checker { name: "IMO", check: crate::goods::check_imo },
        Checker { name: "VIN", check: crate::goods::check_vin },
        Checker { name: "BIC container", check: crate::goods::check_bicc },
        Checker { name: "Aadhaar", check: crate::national::check_aadhaar },
        Checker { name: "CPF", check: crate::national::check_cpf },
        Checker { name: "IdNr", check: crate::national::check_idnr },
        Checker { name: "IPOS AN", check: crate::national::check_iposan },
        Checker { name: "kennitala", check: crate::national::check_kennitala },
        Checker { name: "NHI", check: crate::national::check_nhi },
        Checker { name: "NHS", check: crate::national::check_nhs },
        Checker { name: "OIB", check: crate::national::check_oib },
        Checker { name: "PPS No", check: crate::national::check_ppsn },
        Checker { name: "TC Kimlik No", check: crate::national::check_tckimlik },
        Checker { name: "TFN", check: crate::national::check_tfn },
        Checker { name: "UPN", check: crate::national::check_upn },
        Checker { name: "EU VAT-ID", check: crate::euvat::check_euvatid },
        Checker { name: "Luhn", check: crate::algo::check_luhn },
        Checker { name: "Verhoeff", check: crate::algo::check_verhoeff },
        Checker { name: "Damm", check: crate::algo::check_damm10 },
        Checker { name: "Damm (hex)", check: crate::algo::check_damm16 },
    ];
    CHECKERS
}

/// Outcome of one checker over one input, in owned, serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Scheme name from the registry.
    pub name: &'static str,
    /// How the input fared.
    pub outcome: Outcome,
}

/// Serializable projection of a [`CheckResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Outcome {
    /// Structurally valid, checksum correct.
    Conformant,
    /// Structurally valid, checksum wrong; carries the corrected check
    /// character(s) when the scheme defines them.
    NonConformant {
        #[serde(skip_serializing_if = "Option::is_none")]
        expected: Option<String>,
    },
    /// Structurally invalid for this scheme.
    Malformed { reason: String },
}

impl From<CheckResult> for Outcome {
    fn from(result: CheckResult) -> Self {
        match result {
            Ok(()) => Outcome::Conformant,
            Err(CheckError::Mismatch { expected }) => Outcome::NonConformant {
                expected: Some(expected.as_str().to_owned()),
            },
            Err(CheckError::Failed) => Outcome::NonConformant { expected: None },
            Err(CheckError::Malformed(reason)) => Outcome::Malformed {
                reason: reason.to_string(),
            },
        }
    }
}

/// Run every registered checker over `input` and collect the verdicts,
/// in registry order.
pub fn scan(input: &str) -> Vec<Verdict> {
    checkers()
        .iter()
        .map(|c| Verdict {
            name: c.name,
            outcome: (c.check)(input).into(),
        })
        .collect()
}

/// Names of the schemes whose check passed for `input`, in registry
/// order.
pub fn matches(input: &str) -> Vec<&'static str> {
    checkers()
        .iter()
        .filter(|c| (c.check)(input).is_ok())
        .map(|c| c.name)
        .collect()
}
