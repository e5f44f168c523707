//! Bar-family charts.

use siv_core::schema::{
    AGE_GROUP, AREA, AREA_NATIONAL, AREA_RURAL, AREA_URBAN, BOTH_SEXES, COUNTRY, EDUCATION,
    EDUCATION_TOTAL, LOW_PRODUCTIVITY, LOW_PRODUCTIVITY_TOTAL, SERVICES, SEX, SEX_MEN, SEX_WOMEN,
};
use siv_core::{
    AxisMeta, Breakdown, ChartKind, ChartSeries, ChartSpec, ReferenceLine, SivError, SivResult,
};
use siv_data::{distinct_in_order, str_column, value_column, year_column, DatasetRegistry, Indicator};
use tracing::debug;

fn axes_for(indicator: Indicator) -> AxisMeta {
    if indicator.percent_scale() {
        AxisMeta::percent()
    } else {
        AxisMeta::default()
    }
}

/// Grouped bars across the reference years: one bar series per year, the
/// chosen breakdown's category values on the category axis.
///
/// A year missing from the data yields a shorter (possibly empty) series for
/// that year; only a slice empty across every year collapses to the empty
/// spec.
pub fn year_grouped_bars(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
    breakdown: Breakdown,
    years: &[i32],
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let series_of = str_column(df, breakdown.series_column())?;
    let (hold_column, hold_value) = breakdown.hold();
    let hold_of = str_column(df, hold_column)?;

    let categories = distinct_in_order(&series_of);

    let mut series = Vec::with_capacity(years.len());
    for &year in years {
        let mut values = Vec::new();
        for category in &categories {
            let hit = (0..df.height()).find(|&i| {
                country_of[i] == Some(country)
                    && hold_of[i] == Some(hold_value)
                    && year_of[i] == Some(year)
                    && series_of[i] == Some(category.as_str())
            });
            if let Some(v) = hit.and_then(|i| value_of[i]) {
                values.push(v);
            }
        }
        series.push(ChartSeries::new(year.to_string(), values));
    }

    if series.iter().all(|s| s.values.is_empty()) {
        debug!(country, dataset = indicator.key(), "grouped bars: empty slice");
        return Ok(ChartSpec::empty());
    }

    Ok(ChartSpec {
        title: country.to_string(),
        kind: ChartKind::GroupedBars,
        categories,
        series,
        axes: axes_for(indicator),
        ..ChartSpec::default()
    })
}

/// Grouped bars across the reference years for one area, education levels on
/// the category axis.
pub fn education_year_bars(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
    area: &str,
    years: &[i32],
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let area_of = str_column(df, AREA)?;
    let education_of = str_column(df, EDUCATION)?;

    let slice: Vec<usize> = (0..df.height())
        .filter(|&i| {
            country_of[i] == Some(country)
                && area_of[i] == Some(area)
                && year_of[i].is_some_and(|y| years.contains(&y))
        })
        .collect();
    if slice.is_empty() {
        debug!(country, area, dataset = indicator.key(), "education bars: empty slice");
        return Ok(ChartSpec::empty());
    }

    let education_slice: Vec<Option<&str>> = slice.iter().map(|&i| education_of[i]).collect();
    let categories = distinct_in_order(&education_slice);

    let mut series = Vec::with_capacity(years.len());
    for &year in years {
        let mut values = Vec::new();
        for category in &categories {
            let hit = slice
                .iter()
                .find(|&&i| year_of[i] == Some(year) && education_of[i] == Some(category.as_str()));
            if let Some(v) = hit.and_then(|&i| value_of[i]) {
                values.push(v);
            }
        }
        series.push(ChartSeries::new(year.to_string(), values));
    }

    Ok(ChartSpec {
        title: country.to_string(),
        kind: ChartKind::GroupedBars,
        categories,
        series,
        axes: axes_for(indicator),
        ..ChartSpec::default()
    })
}

/// Ranked single-year bar over national totals, sorted ascending by value,
/// with the parity line at 100.
///
/// An empty post-filter slice yields the empty spec, never an error.
pub fn ranked_country_bars(
    registry: &DatasetRegistry,
    indicator: Indicator,
    year: i32,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let area_of = str_column(df, AREA)?;
    let education_of = str_column(df, EDUCATION)?;

    let mut rows: Vec<(&str, f64)> = Vec::new();
    for i in 0..df.height() {
        if year_of[i] == Some(year)
            && area_of[i] == Some(AREA_NATIONAL)
            && education_of[i] == Some(EDUCATION_TOTAL)
        {
            if let (Some(country), Some(value)) = (country_of[i], value_of[i]) {
                rows.push((country, value));
            }
        }
    }
    if rows.is_empty() {
        debug!(year, dataset = indicator.key(), "ranked bars: empty slice");
        return Ok(ChartSpec::empty());
    }
    rows.sort_by(|a, b| a.1.total_cmp(&b.1));

    let categories: Vec<String> = rows.iter().map(|(c, _)| (*c).to_string()).collect();
    let values: Vec<f64> = rows.iter().map(|(_, v)| *v).collect();

    Ok(ChartSpec {
        title: year.to_string(),
        kind: ChartKind::GroupedBars,
        categories,
        series: vec![ChartSeries::new(year.to_string(), values)],
        axes: axes_for(indicator),
        reference_line: Some(ReferenceLine {
            x0: 0.0,
            y0: 100.0,
            x1: (rows.len() - 1) as f64,
            y1: 100.0,
        }),
        ..ChartSpec::default()
    })
}

/// Latest-year breakdown of economic participation: national and both-sexes
/// aggregates dropped, then only rows at the maximum remaining year kept,
/// one series per (area, sex) pair over the age groups.
pub fn latest_year_participation(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let area_of = str_column(df, AREA)?;
    let sex_of = str_column(df, SEX)?;
    let age_of = str_column(df, AGE_GROUP)?;

    let mut slice: Vec<usize> = (0..df.height())
        .filter(|&i| {
            country_of[i] == Some(country)
                && area_of[i].is_some_and(|a| a != AREA_NATIONAL)
                && sex_of[i].is_some_and(|s| s != BOTH_SEXES)
        })
        .collect();

    let latest = slice
        .iter()
        .filter_map(|&i| year_of[i])
        .max()
        .ok_or_else(|| {
            SivError::EmptySlice(format!(
                "{} has no disaggregated rows for '{country}'",
                indicator.key()
            ))
        })?;
    slice.retain(|&i| year_of[i] == Some(latest));

    let age_slice: Vec<Option<&str>> = slice.iter().map(|&i| age_of[i]).collect();
    let categories = distinct_in_order(&age_slice);

    let mut series = Vec::with_capacity(4);
    for area in [AREA_RURAL, AREA_URBAN] {
        for sex in [SEX_MEN, SEX_WOMEN] {
            let mut values = Vec::new();
            for category in &categories {
                let hit = slice.iter().find(|&&i| {
                    area_of[i] == Some(area)
                        && sex_of[i] == Some(sex)
                        && age_of[i] == Some(category.as_str())
                });
                if let Some(v) = hit.and_then(|&i| value_of[i]) {
                    values.push(v);
                }
            }
            series.push(ChartSeries::new(format!("{area} - {sex}"), values));
        }
    }

    Ok(ChartSpec {
        title: format!("{country} {latest}"),
        kind: ChartKind::GroupedBars,
        categories,
        series,
        axes: axes_for(indicator),
        ..ChartSpec::default()
    })
}

/// Stacked bars per sex over the years, held at the low-productivity total.
pub fn sex_stacked_bars(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let sex_of = str_column(df, SEX)?;
    let total_of = str_column(df, LOW_PRODUCTIVITY)?;

    let slice: Vec<usize> = (0..df.height())
        .filter(|&i| {
            country_of[i] == Some(country)
                && total_of[i] == Some(LOW_PRODUCTIVITY_TOTAL)
                && sex_of[i].is_some_and(|s| s != BOTH_SEXES)
        })
        .collect();

    let mut years: Vec<i32> = Vec::new();
    for &i in &slice {
        if let Some(y) = year_of[i] {
            if !years.contains(&y) {
                years.push(y);
            }
        }
    }
    if years.is_empty() {
        debug!(country, dataset = indicator.key(), "stacked bars: empty slice");
        return Ok(ChartSpec::empty());
    }
    years.sort_unstable();

    let mut series = Vec::with_capacity(2);
    for sex in [SEX_MEN, SEX_WOMEN] {
        let mut values = Vec::new();
        for &year in &years {
            let hit = slice
                .iter()
                .find(|&&i| sex_of[i] == Some(sex) && year_of[i] == Some(year));
            if let Some(v) = hit.and_then(|&i| value_of[i]) {
                values.push(v);
            }
        }
        series.push(ChartSeries::new(sex, values));
    }

    Ok(ChartSpec {
        title: country.to_string(),
        kind: ChartKind::StackedBars,
        categories: years.iter().map(|y| y.to_string()).collect(),
        series,
        axes: axes_for(indicator),
        ..ChartSpec::default()
    })
}

/// Grouped bars of service availability at one (country, year), one series
/// per area present in the slice.
pub fn services_grouped_bars(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
    year: i32,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let area_of = str_column(df, AREA)?;
    let services_of = str_column(df, SERVICES)?;

    let slice: Vec<usize> = (0..df.height())
        .filter(|&i| country_of[i] == Some(country) && year_of[i] == Some(year))
        .collect();
    if slice.is_empty() {
        debug!(country, year, dataset = indicator.key(), "services bars: empty slice");
        return Ok(ChartSpec::empty());
    }

    let services_slice: Vec<Option<&str>> = slice.iter().map(|&i| services_of[i]).collect();
    let categories = distinct_in_order(&services_slice);
    let area_slice: Vec<Option<&str>> = slice.iter().map(|&i| area_of[i]).collect();
    let areas = distinct_in_order(&area_slice);

    let mut series = Vec::with_capacity(areas.len());
    for area in &areas {
        let mut values = Vec::new();
        for category in &categories {
            let hit = slice.iter().find(|&&i| {
                area_of[i] == Some(area.as_str()) && services_of[i] == Some(category.as_str())
            });
            if let Some(v) = hit.and_then(|&i| value_of[i]) {
                values.push(v);
            }
        }
        series.push(ChartSeries::new(area.clone(), values));
    }

    Ok(ChartSpec {
        title: format!("{country} {year}"),
        kind: ChartKind::GroupedBars,
        categories,
        series,
        axes: axes_for(indicator),
        ..ChartSpec::default()
    })
}
