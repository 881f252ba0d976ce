//! # pocket-tools
//!
//! Two single-shot command-line tools that read standard input and print one
//! result:
//!
//! - `currency-converter`: converts an amount between currencies using a JSON
//!   rate table
//! - `reading-time`: estimates reading time in minutes for free text
//!
//! The binaries are thin wrappers; all computation lives here.
//!
//! ## Example
//!
//! ```rust
//! use pocket_tools::prelude::*;
//!
//! let converted = pocket_tools::currency::run("100 USD EUR\n{\"USD\": 1.0, \"EUR\": 0.5}").unwrap();
//! assert_eq!(converted, 50.0);
//!
//! let estimate = ReadingTimeEstimator::default().estimate("Short and sweet.");
//! assert_eq!(estimate.minutes, 1);
//! ```

pub mod constants;
pub mod currency;
pub mod error;
pub mod input;
pub mod reading;

pub mod prelude {
    //! Commonly used types
    pub use crate::currency::{ConversionRequest, CurrencyConverter, RateTable};
    pub use crate::error::{Result, ToolError};
    pub use crate::reading::{ReadingEstimate, ReadingTimeEstimator};
}
