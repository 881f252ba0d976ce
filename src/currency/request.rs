//! Conversion request parsing

use crate::error::{Result, ToolError};
use std::fmt;
use std::str::FromStr;

/// A single conversion: `amount` of `from` expressed in `to`
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    /// Create new conversion request
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Requested codes in request order, without duplicates
    pub fn codes(&self) -> Vec<&str> {
        if self.from == self.to {
            vec![self.from.as_str()]
        } else {
            vec![self.from.as_str(), self.to.as_str()]
        }
    }
}

impl FromStr for ConversionRequest {
    type Err = ToolError;

    /// Parse a header line of the form `<amount> <from> <to>`
    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [amount, from, to] = fields.as_slice() else {
            return Err(ToolError::MalformedRequest(format!(
                "expected `<amount> <from> <to>`, got {} field(s)",
                fields.len()
            )));
        };

        let amount: f64 = amount.parse().map_err(|e| {
            ToolError::MalformedRequest(format!("invalid amount {:?}: {}", amount, e))
        })?;
        if !amount.is_finite() {
            return Err(ToolError::MalformedRequest(format!(
                "amount must be finite, got {}",
                amount
            )));
        }

        Ok(Self::new(amount, *from, *to))
    }
}

impl fmt::Display for ConversionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.amount, self.from, self.to)
    }
}
