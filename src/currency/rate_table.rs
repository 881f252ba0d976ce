//! Rate table parsing and lookup
//!
//! A rate table maps currency codes to their rate against an implicit base
//! unit. Two JSON layouts are accepted:
//!
//! - a flat object: `{"USD": 1.0, "EUR": 0.92}`
//! - a rate snapshot: `{"base": "EUR", "date": "2024-01-02", "rates": {"USD": 1.09}}`,
//!   where the base currency is always priced at 1.0
//!
//! Entries are only validated when they are looked up, so a table may carry
//! unrelated or nested values for currencies nobody asks about.

use crate::constants::BASE_RATE;
use crate::error::{Result, ToolError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Rate snapshot layout as written by rate-update jobs
#[derive(Debug, Deserialize)]
struct RateSnapshot {
    base: String,
    #[serde(default)]
    date: Option<Value>,
    rates: Map<String, Value>,
}

/// Currency code -> rate against the base unit
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: Map<String, Value>,
    base: Option<String>,
}

impl RateTable {
    /// Create empty rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from numeric rates
    pub fn from_rates<I, S>(rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let rates = rates
            .into_iter()
            .map(|(code, rate)| (code.into(), Value::from(rate)))
            .collect();
        Self { rates, base: None }
    }

    /// Parse a rate table from JSON text
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text.trim())
            .map_err(|e| ToolError::MalformedRateTable(e.to_string()))?;

        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(ToolError::MalformedRateTable(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        if is_snapshot(&map) {
            let snapshot: RateSnapshot = serde_json::from_value(Value::Object(map))
                .map_err(|e| ToolError::MalformedRateTable(format!("invalid rate snapshot: {}", e)))?;
            return Ok(Self::from_snapshot(snapshot));
        }

        log::debug!("parsed flat rate table with {} entries", map.len());
        Ok(Self {
            rates: map,
            base: None,
        })
    }

    fn from_snapshot(snapshot: RateSnapshot) -> Self {
        let mut table = Self {
            rates: snapshot.rates,
            base: Some(snapshot.base.clone()),
        };

        // The base is always worth exactly one base unit
        let listed: Vec<String> = table
            .rates
            .keys()
            .filter(|key| key.eq_ignore_ascii_case(&snapshot.base))
            .cloned()
            .collect();
        for key in listed {
            table.rates.remove(&key);
        }
        table
            .rates
            .insert(snapshot.base.clone(), Value::from(BASE_RATE));

        log::debug!(
            "parsed rate snapshot (base {}, date {}) with {} entries",
            snapshot.base,
            snapshot
                .date
                .as_ref()
                .map_or_else(|| "unknown".to_string(), Value::to_string),
            table.rates.len()
        );
        table
    }

    /// Insert or replace a single rate
    pub fn insert(&mut self, code: impl Into<String>, rate: f64) {
        self.rates.insert(code.into(), Value::from(rate));
    }

    /// Base currency declared by a snapshot, if any
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Number of entries (valid or not)
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currency codes as they appear in the table
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Check whether a code is present, regardless of its value
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Look up the rate for `code`.
    ///
    /// An exact key match wins over an ASCII case-insensitive one. Zero,
    /// negative, subnormal and non-numeric values are invalid rates.
    pub fn rate(&self, code: &str) -> Result<f64> {
        let value = self.find(code).ok_or_else(|| ToolError::UnknownCurrency {
            codes: vec![code.to_string()],
        })?;

        match value.as_f64() {
            Some(rate) if rate.is_normal() && rate > 0.0 => Ok(rate),
            _ => Err(ToolError::InvalidRate {
                code: code.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn find(&self, code: &str) -> Option<&Value> {
        self.rates.get(code).or_else(|| {
            self.rates
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(code))
                .map(|(_, value)| value)
        })
    }
}

/// A snapshot names its base and nests the rates; anything else is flat
fn is_snapshot(map: &Map<String, Value>) -> bool {
    matches!(map.get("base"), Some(Value::String(_)))
        && matches!(map.get("rates"), Some(Value::Object(_)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
