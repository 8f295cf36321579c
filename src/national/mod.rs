//! National tax, health and person numbers.
//!
//! # Example
//!
//! ```
//! use pruefziffer::national::*;
//!
//! assert!(check_nhs("9434765919").is_ok());
//! assert!(check_cpf("111.444.777-35").is_ok());
//! ```

mod aadhaar;
mod cpf;
mod idnr;
mod iposan;
mod kennitala;
mod nhi;
mod nhs;
mod oib;
mod ppsn;
mod tckimlik;
mod tfn;
mod upn;

pub use aadhaar::check_aadhaar;
pub use cpf::check_cpf;
pub use idnr::check_idnr;
pub use iposan::check_iposan;
pub use kennitala::check_kennitala;
pub use nhi::check_nhi;
pub use nhs::check_nhs;
pub use oib::check_oib;
pub use ppsn::check_ppsn;
pub use tckimlik::check_tckimlik;
pub use tfn::check_tfn;
pub use upn::check_upn;
