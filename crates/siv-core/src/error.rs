//! Unified error types for the siv workspace.
//!
//! This module provides a common error type [`SivError`] that can represent
//! failures from any stage of the slice-and-shape pipeline. Chart resolution
//! catches every variant and substitutes the empty chart; only dataset
//! loading at startup treats these as fatal.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Unified error type for dataset access and chart shaping.
#[derive(Error, Debug)]
pub enum SivError {
    /// A dataset name absent from the registry.
    #[error("unknown dataset '{0}'")]
    MissingDataset(String),

    /// A country outside the reference mapping and its overrides.
    #[error("unknown country '{0}'")]
    UnknownCountry(String),

    /// A categorical value absent from a lookup column.
    #[error("unknown category '{value}' in column '{column}'")]
    UnknownCategory { column: String, value: String },

    /// Filter predicates matched zero rows.
    #[error("no rows after filtering: {0}")]
    EmptySlice(String),

    /// A cell could not be parsed as the expected numeric type.
    #[error("column '{column}' cannot be coerced to {expected}")]
    Coercion {
        column: String,
        expected: &'static str,
    },

    /// Errors from the underlying dataframe library (missing columns, bad
    /// schema, CSV parse failures).
    #[error("dataframe error: {0}")]
    Frame(#[from] PolarsError),

    /// I/O errors (dataset files, config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors (for wrapping external errors).
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using SivError.
pub type SivResult<T> = Result<T, SivError>;

impl From<anyhow::Error> for SivError {
    fn from(err: anyhow::Error) -> Self {
        SivError::Other(err.to_string())
    }
}

impl From<String> for SivError {
    fn from(s: String) -> Self {
        SivError::Other(s)
    }
}

impl From<&str> for SivError {
    fn from(s: &str) -> Self {
        SivError::Other(s.to_string())
    }
}
