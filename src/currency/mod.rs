//! Currency conversion
//!
//! Converts an amount between two currencies using a rate table where every
//! rate is quoted against a common base unit.
//!
//! # Components
//!
//! - **rate_table**: JSON rate table parsing and validated lookup
//! - **request**: `<amount> <from> <to>` header parsing
//! - **converter**: the conversion itself and the stdin pipeline
//!
//! # Example
//!
//! ```rust
//! use pocket_tools::currency::{ConversionRequest, CurrencyConverter};
//!
//! let converter = CurrencyConverter::from_json(r#"{"USD": 1.0, "EUR": 0.5}"#).unwrap();
//! let request = ConversionRequest::new(100.0, "USD", "EUR");
//!
//! assert_eq!(converter.convert(&request).unwrap(), 50.0);
//! ```

pub mod converter;
pub mod rate_table;
pub mod request;

pub use converter::{convert_amount, format_amount, parse_input, run, CurrencyConverter};
pub use rate_table::RateTable;
pub use request::ConversionRequest;
