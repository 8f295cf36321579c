//! EU VAT identification numbers.
//!
//! [`check_euvatid`] takes the prefixed form and dispatches per member
//! state; the per-country functions accept the number with or without
//! its prefix.
//!
//! # Example
//!
//! ```
//! use pruefziffer::euvat::*;
//!
//! assert!(check_euvatid("DE136695976").is_ok());
//! assert!(check_devatid("136695976").is_ok());
//! ```

mod checksum;
mod format;

pub use checksum::{check_bevatid, check_devatid, check_dkvatid, check_fivatid, check_frvatid};
pub use format::check_euvatid;
