//! Country-name → short-code mapping.
//!
//! Derived by zipping two parallel columns of a reference dataset, then
//! overlaying the two aggregate-region rows that the reference table does
//! not carry. Lookups for anything else fail with
//! [`SivError::UnknownCountry`]; callers that want a soft fallback use
//! [`CountryCodes::label_for`] or guard with [`CountryCodes::contains`].

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use siv_core::{SivError, SivResult};

use crate::frame::str_column;

/// Aggregate regions absent from the reference table.
pub const AGGREGATE_OVERRIDES: [(&str, &str); 2] = [
    ("América Latina", "AL"),
    ("América Latina y el Caribe", "ALC"),
];

/// One-to-one country-name → code lookup.
#[derive(Debug, Clone)]
pub struct CountryCodes {
    codes: BTreeMap<String, String>,
}

impl CountryCodes {
    /// Zip two parallel columns of the reference dataset, then overlay the
    /// aggregate-region entries.
    pub fn from_reference(df: &DataFrame, name_col: &str, code_col: &str) -> SivResult<Self> {
        let names = str_column(df, name_col)?;
        let code_values = str_column(df, code_col)?;

        let mut codes = BTreeMap::new();
        for (name, code) in names.iter().zip(code_values.iter()) {
            if let (Some(name), Some(code)) = (name, code) {
                codes.insert((*name).to_string(), (*code).to_string());
            }
        }
        for (name, code) in AGGREGATE_OVERRIDES {
            codes.insert(name.to_string(), code.to_string());
        }
        Ok(CountryCodes { codes })
    }

    /// Code for a country name.
    pub fn code_for(&self, name: &str) -> SivResult<&str> {
        self.codes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SivError::UnknownCountry(name.to_string()))
    }

    /// Containment guard for callers that handle missing names themselves.
    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Short label for axis ticks: the code when known, the name itself
    /// otherwise.
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.codes.get(name).map(String::as_str).unwrap_or(name)
    }

    /// All (name, code) entries, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
