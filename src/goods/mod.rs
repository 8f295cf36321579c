//! Trade, logistics and physical-object identifiers.
//!
//! # Example
//!
//! ```
//! use pruefziffer::goods::*;
//!
//! assert!(check_gtin("4006381333931").is_ok());
//! assert!(check_vin("1M8GDM9AXKP042788").is_ok());
//! ```

mod bicc;
mod cas;
mod grid;
mod gtin;
mod imei;
mod imo;
mod vin;

pub use bicc::check_bicc;
pub use cas::check_cas;
pub use grid::check_grid;
pub use gtin::check_gtin;
pub use imei::check_imei;
pub use imo::check_imo;
pub use vin::check_vin;
