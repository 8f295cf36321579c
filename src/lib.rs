//! # pruefziffer
//!
//! Checksum and format validation for real-world identifier codes:
//! securities (ISIN, CUSIP, SEDOL, FIGI, WKN), banking (IBAN, BIC, LEI,
//! ABA RTN, payment cards), publishing (ISBN, ISSN, ISMN, ISNI), trade
//! and logistics (GTIN, GRid, IMEI, IMO, VIN, container codes), EU
//! VAT-IDs and national tax/health/person numbers — plus the generic
//! checksum algorithms behind them (Luhn, Verhoeff, Damm, ISO 7064).
//!
//! Every validator is a pure function from a candidate string to a
//! [`CheckResult`]: `Ok(())` for a conformant identifier,
//! [`CheckError::Malformed`] for a structural violation (no checksum is
//! attempted), and [`CheckError::Mismatch`] for a checksum failure,
//! carrying the check character(s) that would have been correct.
//!
//! ## Quick Start
//!
//! ```rust
//! use pruefziffer::finance::{check_iban, check_isin};
//!
//! assert!(check_isin("US0378331005").is_ok());
//!
//! let err = check_iban("GB00WEST12345698765432").unwrap_err();
//! assert_eq!(err.expected().unwrap().as_str(), "82");
//! ```
//!
//! Or run every registered scheme at once:
//!
//! ```rust
//! let matches = pruefziffer::registry::matches("4006381333931");
//! assert!(matches.contains(&"GTIN"));
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`algo`] | Luhn, Verhoeff, Damm, ISO 7064 primitives and classifiers |
//! | [`finance`] | ISIN, CUSIP, SEDOL, FIGI, WKN, IBAN, LEI, BIC, cards, ABA RTN |
//! | [`publishing`] | ISBN, ISSN, ISMN, ISNI |
//! | [`goods`] | GTIN, CAS RN, GRid, IMEI, IMO, VIN, container codes |
//! | [`national`] | Aadhaar, CPF, IdNr, kennitala, NHI, NHS, OIB, PPSN, … |
//! | [`euvat`] | EU VAT-IDs, with check digits for DE, BE, DK, FI, FR, HR |
//! | [`registry`] | Ordered checker list, [`scan`](registry::scan) over all schemes |

pub mod algo;
pub mod euvat;
pub mod finance;
pub mod goods;
pub mod national;
mod outcome;
pub mod publishing;
pub mod registry;

pub use outcome::{CheckError, CheckResult, Expected, Malformed};
