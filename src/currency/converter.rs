//! Currency conversion against a rate table

use super::rate_table::RateTable;
use super::request::ConversionRequest;
use crate::error::{Result, ToolError};

/// Convert `amount` between two rates quoted against the same base unit.
///
/// The amount is normalized to the base unit (`amount / from_rate`) and then
/// expressed in the target currency (`* to_rate`). Rates must be positive.
pub fn convert_amount(amount: f64, from_rate: f64, to_rate: f64) -> f64 {
    (amount / from_rate) * to_rate
}

/// Split converter input into the request header and the rate table.
///
/// The first non-blank line is the header; everything after it is the rate
/// table text.
pub fn parse_input(input: &str) -> Result<(ConversionRequest, RateTable)> {
    let input = input.trim_start();
    let (header, body) = input.split_once('\n').unwrap_or((input, ""));

    let request: ConversionRequest = header.parse()?;
    let table = RateTable::parse(body)?;
    log::debug!("request {} against {} rates", request, table.len());

    Ok((request, table))
}

/// Converts amounts using a fixed rate table
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    table: RateTable,
}

impl CurrencyConverter {
    /// Create converter over a rate table
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    /// Create converter from rate table JSON
    pub fn from_json(text: &str) -> Result<Self> {
        RateTable::parse(text).map(Self::new)
    }

    /// Convert a request.
    ///
    /// All missing codes are reported together before any rate is checked,
    /// so `UnknownCurrency` takes precedence over `InvalidRate`. A result
    /// that overflows to infinity is `ResultOutOfRange`.
    pub fn convert(&self, request: &ConversionRequest) -> Result<f64> {
        let missing: Vec<String> = request
            .codes()
            .into_iter()
            .filter(|code| !self.table.contains(code))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(ToolError::UnknownCurrency { codes: missing });
        }

        let from_rate = self.table.rate(&request.from)?;
        let to_rate = self.table.rate(&request.to)?;
        let result = convert_amount(request.amount, from_rate, to_rate);
        if !result.is_finite() {
            return Err(ToolError::ResultOutOfRange(request.to_string()));
        }

        log::trace!(
            "{} at {}/{} = {}",
            request,
            from_rate,
            to_rate,
            result
        );
        Ok(result)
    }
}

/// Run the full converter pipeline over raw input text
pub fn run(input: &str) -> Result<f64> {
    let (request, table) = parse_input(input)?;
    CurrencyConverter::new(table).convert(&request)
}

/// Render a converted amount as a plain decimal number
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}
