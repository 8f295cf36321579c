//! Bibliographic identifiers: books, serials, sheet music, names.
//!
//! # Example
//!
//! ```
//! use pruefziffer::publishing::*;
//!
//! assert!(check_isbn("978-3-16-148410-0").is_ok());
//! assert!(check_issn("0378-5955").is_ok());
//! ```

mod isbn;
mod ismn;
mod isni;
mod issn;

pub use isbn::{check_isbn, check_isbn10, check_isbn13};
pub use ismn::{check_ismn, check_ismn10, check_ismn13};
pub use isni::check_isni;
pub use issn::{check_issn, check_issn8, check_issn13};
