//! Typed column extraction.
//!
//! The source tables store years and values as text or mixed types; these
//! helpers coerce them once per shaping call and hand back plain vectors the
//! filter predicates can zip over. Coercion that silently loses cells is an
//! error: a cast that produces more nulls than the source column had means
//! some cell failed to parse.

use polars::prelude::*;
use siv_core::schema::{VALUE, YEAR};
use siv_core::{SivError, SivResult};

/// Read a categorical column as one optional string per row.
pub fn str_column<'a>(df: &'a DataFrame, name: &str) -> SivResult<Vec<Option<&'a str>>> {
    let chunked = df.column(name)?.utf8()?;
    Ok(chunked.into_iter().collect())
}

/// Coerce the year column to integers.
pub fn year_column(df: &DataFrame) -> SivResult<Vec<Option<i32>>> {
    let casted = cast_checked(df, YEAR, &DataType::Int32, "i32")?;
    Ok(casted.i32()?.into_iter().collect())
}

/// Coerce the value column to floats.
pub fn value_column(df: &DataFrame) -> SivResult<Vec<Option<f64>>> {
    let casted = cast_checked(df, VALUE, &DataType::Float64, "f64")?;
    Ok(casted.f64()?.into_iter().collect())
}

fn cast_checked(
    df: &DataFrame,
    name: &str,
    dtype: &DataType,
    expected: &'static str,
) -> SivResult<Series> {
    let source = df.column(name)?;
    let casted = source.cast(dtype)?;
    if casted.null_count() > source.null_count() {
        return Err(SivError::Coercion {
            column: name.to_string(),
            expected,
        });
    }
    Ok(casted)
}

/// Distinct values of a column in first-seen order.
///
/// Category axes follow source row order, not alphabetical order, so this
/// deliberately avoids the sorting `unique` would introduce.
pub fn distinct_in_order(values: &[Option<&str>]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values.iter().flatten() {
        if seen.insert(*value) {
            out.push((*value).to_string());
        }
    }
    out
}
