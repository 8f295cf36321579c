//! Securities, banking and payment identifiers.
//!
//! # Example
//!
//! ```
//! use pruefziffer::finance::*;
//!
//! assert!(check_isin("US0378331005").is_ok());
//! assert!(check_iban("DE89370400440532013000").is_ok());
//!
//! let err = check_lei("5493006MHB84DD0ZWV19").unwrap_err();
//! assert_eq!(err.expected().unwrap().as_str(), "18");
//! ```

mod abartn;
mod bic;
mod card;
mod countries;
mod cusip;
mod figi;
mod iban;
mod isin;
mod lei;
mod sedol;
mod wkn;

pub use abartn::check_abartn;
pub use bic::check_bic;
pub use card::{CardIssuer, check_card, issuer};
pub use countries::is_known_country_code;
pub use cusip::check_cusip;
pub use figi::check_figi;
pub use iban::check_iban;
pub use isin::check_isin;
pub use lei::check_lei;
pub use sedol::check_sedol;
pub use wkn::check_wkn;
