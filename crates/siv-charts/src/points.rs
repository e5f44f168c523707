//! Point-family charts: the Gini endpoint comparison and the ranked dot
//! plot.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use siv_core::schema::{AREA, COUNTRY, VALUE, YEAR};
use siv_core::{AxisMeta, ChartKind, ChartSeries, ChartSpec, ReferenceLine, SivError, SivResult};
use siv_data::{distinct_in_order, str_column, value_column, year_column, CountryCodes, DatasetRegistry, Indicator};
use tracing::debug;

/// Comparison window of the Gini chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiniWindow {
    /// Full available range.
    Decade2000s,
    /// Years after 2009 only.
    Decade2010s,
}

impl GiniWindow {
    pub fn label(&self) -> &'static str {
        match self {
            GiniWindow::Decade2000s => "2000s",
            GiniWindow::Decade2010s => "2010s",
        }
    }
}

impl fmt::Display for GiniWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GiniWindow {
    type Err = SivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2000s" => Ok(GiniWindow::Decade2000s),
            "2010s" => Ok(GiniWindow::Decade2010s),
            other => Err(SivError::UnknownCategory {
                column: "período".into(),
                value: other.into(),
            }),
        }
    }
}

/// Per-country endpoint comparison of the Gini coefficient.
///
/// For each country the earliest and latest survey years inside the window
/// are taken over every area, then looked up at the selected area; a country
/// missing either endpoint there is skipped. Ties classify as increased.
pub fn gini_comparison(
    registry: &DatasetRegistry,
    indicator: Indicator,
    area: &str,
    window: GiniWindow,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;

    // Coerce year/value on a copy so the lazy aggregation and the endpoint
    // lookups see the same types.
    let mut coerced = df.clone();
    let year_cast = coerced.column(YEAR)?.cast(&DataType::Int32)?;
    let value_cast = coerced.column(VALUE)?.cast(&DataType::Float64)?;
    coerced.with_column(year_cast)?;
    coerced.with_column(value_cast)?;

    let year_of = year_column(&coerced)?;
    let value_of = value_column(&coerced)?;
    let country_of = str_column(&coerced, COUNTRY)?;
    let area_of = str_column(&coerced, AREA)?;

    let mut lf = coerced.clone().lazy();
    if let GiniWindow::Decade2010s = window {
        lf = lf.filter(col(YEAR).gt(lit(2009)));
    }
    let extremes = lf
        .group_by_stable([col(COUNTRY)])
        .agg([
            col(YEAR).min().alias("primer_año"),
            col(YEAR).max().alias("ultimo_año"),
        ])
        .collect()?;

    let ext_country = extremes.column(COUNTRY)?.utf8()?;
    let ext_first = extremes.column("primer_año")?.i32()?;
    let ext_last = extremes.column("ultimo_año")?.i32()?;

    let lookup = |country: &str, year: i32| -> Option<f64> {
        (0..coerced.height())
            .find(|&i| {
                country_of[i] == Some(country)
                    && year_of[i] == Some(year)
                    && area_of[i] == Some(area)
            })
            .and_then(|i| value_of[i])
    };

    let mut increased: (Vec<f64>, Vec<f64>, Vec<String>) = Default::default();
    let mut decreased: (Vec<f64>, Vec<f64>, Vec<String>) = Default::default();
    for ((country, first), last) in ext_country.into_iter().zip(ext_first).zip(ext_last) {
        let (Some(country), Some(first), Some(last)) = (country, first, last) else {
            continue;
        };
        let (Some(initial), Some(final_value)) = (lookup(country, first), lookup(country, last))
        else {
            continue;
        };
        let bucket = if final_value >= initial {
            &mut increased
        } else {
            &mut decreased
        };
        bucket.0.push(initial);
        bucket.1.push(final_value);
        bucket.2.push(country.to_string());
    }

    let mut series = Vec::new();
    for (name, (xs, ys, labels)) in [
        ("Increased Inequality", increased),
        ("Decreased Inequality", decreased),
    ] {
        if !ys.is_empty() {
            series.push(ChartSeries {
                name: name.to_string(),
                values: ys,
                x: Some(xs),
                labels: Some(labels),
            });
        }
    }
    if series.is_empty() {
        debug!(area, window = window.label(), "gini comparison: empty slice");
        return Ok(ChartSpec::empty());
    }

    Ok(ChartSpec {
        title: format!("{} - {area}", indicator.title()),
        kind: ChartKind::Scatter,
        categories: Vec::new(),
        series,
        axes: AxisMeta {
            x_title: Some(format!("Gini {}", window.label())),
            y_title: Some("Gini final".to_string()),
            ..AxisMeta::default()
        },
        reference_line: Some(ReferenceLine {
            x0: 0.3,
            y0: 0.3,
            x1: 0.7,
            y1: 0.7,
        }),
        ..ChartSpec::default()
    })
}

/// Dot plot over a shared country ordering.
///
/// The ordering is countries ascending by value at the dataset minimum year
/// for the reference category; countries first appearing only at the
/// selected year are appended in encounter order. Each requested category
/// becomes one marker series whose `x` carries positions on that ordering.
pub fn reference_ranked_dots(
    registry: &DatasetRegistry,
    indicator: Indicator,
    year: i32,
    dimension: &str,
    reference: &str,
    requested: &[&str],
    codes: Option<&CountryCodes>,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let dimension_of = str_column(df, dimension)?;

    let dimension_values = distinct_in_order(&dimension_of);
    if !dimension_values.iter().any(|v| v == reference) {
        return Err(SivError::UnknownCategory {
            column: dimension.to_string(),
            value: reference.to_string(),
        });
    }

    let min_year = year_of
        .iter()
        .flatten()
        .copied()
        .min()
        .ok_or_else(|| SivError::EmptySlice(format!("{} has no years", indicator.key())))?;

    // Baseline ordering: ascending by value at the minimum year for the
    // reference category.
    let mut baseline: Vec<(&str, f64)> = Vec::new();
    for i in 0..df.height() {
        if year_of[i] == Some(min_year) && dimension_of[i] == Some(reference) {
            if let (Some(country), Some(value)) = (country_of[i], value_of[i]) {
                baseline.push((country, value));
            }
        }
    }
    baseline.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut order: Vec<&str> = baseline.iter().map(|(c, _)| *c).collect();
    let mut seen: std::collections::HashSet<&str> = order.iter().copied().collect();
    for i in 0..df.height() {
        if year_of[i] == Some(year) {
            if let Some(country) = country_of[i] {
                if seen.insert(country) {
                    order.push(country);
                }
            }
        }
    }

    let rank: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(position, &country)| (country, position))
        .collect();

    let mut series = Vec::with_capacity(requested.len());
    for &category in requested {
        let mut points: Vec<(usize, f64)> = (0..df.height())
            .filter(|&i| year_of[i] == Some(year) && dimension_of[i] == Some(category))
            .filter_map(|i| {
                let position = *rank.get(country_of[i]?)?;
                Some((position, value_of[i]?))
            })
            .collect();
        points.sort_by_key(|(position, _)| *position);
        series.push(ChartSeries {
            name: format!("{category} {year}"),
            values: points.iter().map(|(_, v)| *v).collect(),
            x: Some(points.iter().map(|(p, _)| *p as f64).collect()),
            labels: None,
        });
    }

    let categories: Vec<String> = order
        .iter()
        .map(|&country| match codes {
            Some(codes) => codes.label_for(country).to_string(),
            None => country.to_string(),
        })
        .collect();

    Ok(ChartSpec {
        title: format!("{} - {year}", indicator.title()),
        kind: ChartKind::Dots,
        categories,
        series,
        axes: if indicator.percent_scale() {
            AxisMeta::percent()
        } else {
            AxisMeta::default()
        },
        ..ChartSpec::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gini_registry(rows: Vec<(&str, i32, f64, &str)>) -> DatasetRegistry {
        let df = df![
            "País" => rows.iter().map(|r| r.0).collect::<Vec<_>>(),
            "Años" => rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            "valor" => rows.iter().map(|r| r.2).collect::<Vec<_>>(),
            "Área geográfica" => rows.iter().map(|r| r.3).collect::<Vec<_>>(),
        ]
        .unwrap();
        DatasetRegistry::from_frames([("gini".to_string(), df)])
    }

    fn series_named<'a>(spec: &'a ChartSpec, name: &str) -> Option<&'a ChartSeries> {
        spec.series.iter().find(|s| s.name == name)
    }

    #[test]
    fn test_gini_endpoints_classify_increase_and_decrease() {
        let registry = gini_registry(vec![
            ("Alza", 2002, 0.40, "Nacional"),
            ("Alza", 2019, 0.45, "Nacional"),
            ("Baja", 2002, 0.45, "Nacional"),
            ("Baja", 2019, 0.40, "Nacional"),
        ]);
        let spec =
            gini_comparison(&registry, Indicator::Gini, "Nacional", GiniWindow::Decade2000s)
                .unwrap();

        let up = series_named(&spec, "Increased Inequality").unwrap();
        assert_eq!(up.labels.as_deref(), Some(&["Alza".to_string()][..]));
        assert_eq!(up.x.as_deref(), Some(&[0.40][..]));
        assert_eq!(up.values, vec![0.45]);

        let down = series_named(&spec, "Decreased Inequality").unwrap();
        assert_eq!(down.labels.as_deref(), Some(&["Baja".to_string()][..]));
        assert_eq!(down.values, vec![0.40]);
    }

    #[test]
    fn test_gini_tie_counts_as_increased() {
        let registry = gini_registry(vec![
            ("Plano", 2002, 0.42, "Nacional"),
            ("Plano", 2019, 0.42, "Nacional"),
        ]);
        let spec =
            gini_comparison(&registry, Indicator::Gini, "Nacional", GiniWindow::Decade2000s)
                .unwrap();
        assert!(series_named(&spec, "Increased Inequality").is_some());
        assert!(series_named(&spec, "Decreased Inequality").is_none());
    }

    #[test]
    fn test_gini_end_to_end_scenario() {
        // País X: 0.40 in 2002, 0.46 in 2018, national area.
        let registry = gini_registry(vec![
            ("X", 2002, 0.40, "Nacional"),
            ("X", 2018, 0.46, "Nacional"),
        ]);
        let spec =
            gini_comparison(&registry, Indicator::Gini, "Nacional", GiniWindow::Decade2000s)
                .unwrap();

        assert_eq!(spec.series.len(), 1);
        let point = &spec.series[0];
        assert_eq!(point.name, "Increased Inequality");
        assert_eq!(point.x.as_deref(), Some(&[0.40][..]));
        assert_eq!(point.values, vec![0.46]);
        assert_eq!(point.labels.as_deref(), Some(&["X".to_string()][..]));
        assert!(spec.reference_line.is_some());
    }

    #[test]
    fn test_gini_2010s_window_drops_earlier_years() {
        let registry = gini_registry(vec![
            ("X", 2002, 0.60, "Nacional"),
            ("X", 2010, 0.44, "Nacional"),
            ("X", 2019, 0.46, "Nacional"),
        ]);
        let spec =
            gini_comparison(&registry, Indicator::Gini, "Nacional", GiniWindow::Decade2010s)
                .unwrap();
        let point = &spec.series[0];
        // Window starts at 2010, so the 2002 endpoint is ignored.
        assert_eq!(point.x.as_deref(), Some(&[0.44][..]));
        assert_eq!(point.name, "Increased Inequality");
    }

    #[test]
    fn test_gini_country_missing_an_endpoint_is_skipped() {
        // "Parcial" has its country-wide minimum year only in the urban
        // area, so the national lookup misses and the country is dropped.
        let registry = gini_registry(vec![
            ("Parcial", 2002, 0.50, "Urbana"),
            ("Parcial", 2019, 0.48, "Nacional"),
            ("Completo", 2002, 0.40, "Nacional"),
            ("Completo", 2019, 0.41, "Nacional"),
        ]);
        let spec =
            gini_comparison(&registry, Indicator::Gini, "Nacional", GiniWindow::Decade2000s)
                .unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(
            spec.series[0].labels.as_deref(),
            Some(&["Completo".to_string()][..])
        );
    }

    fn victimization_registry() -> DatasetRegistry {
        let df = df![
            "País" => &[
                "Chile", "Uruguay", "Paraguay",
                "Chile", "Uruguay", "Paraguay", "Ecuador", "Bolivia",
            ],
            "Años" => &[2010i32, 2010, 2010, 2018, 2018, 2018, 2018, 2018],
            "valor" => &[30.0, 10.0, 20.0, 28.0, 12.0, 22.0, 17.0, 33.0],
            "Sexo" => &[
                "Mujeres", "Mujeres", "Mujeres",
                "Mujeres", "Mujeres", "Mujeres", "Mujeres", "Mujeres",
            ],
        ]
        .unwrap();
        DatasetRegistry::from_frames([("tasa_victimizacion".to_string(), df)])
    }

    #[test]
    fn test_dots_baseline_orders_by_minimum_year_value() {
        let registry = victimization_registry();
        let spec = reference_ranked_dots(
            &registry,
            Indicator::Victimization,
            2018,
            "Sexo",
            "Mujeres",
            &["Mujeres"],
            None,
        )
        .unwrap();

        // Baseline at 2010 sorts Uruguay (10) < Paraguay (20) < Chile (30);
        // Ecuador and Bolivia only appear in 2018 and are appended in
        // encounter order.
        assert_eq!(
            spec.categories,
            vec!["Uruguay", "Paraguay", "Chile", "Ecuador", "Bolivia"]
        );
        let trace = &spec.series[0];
        assert_eq!(trace.name, "Mujeres 2018");
        assert_eq!(trace.x.as_deref(), Some(&[0.0, 1.0, 2.0, 3.0, 4.0][..]));
        assert_eq!(trace.values, vec![12.0, 22.0, 28.0, 17.0, 33.0]);
    }

    #[test]
    fn test_dots_unknown_reference_category_errors() {
        let registry = victimization_registry();
        let err = reference_ranked_dots(
            &registry,
            Indicator::Victimization,
            2018,
            "Sexo",
            "Niñas",
            &["Mujeres"],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, SivError::UnknownCategory { .. }));
    }

    #[test]
    fn test_dots_apply_country_codes_to_categories() {
        let reference = df![
            "País" => &["Chile", "Uruguay", "Paraguay"],
            "Código" => &["CHL", "URY", "PRY"],
        ]
        .unwrap();
        let codes = CountryCodes::from_reference(&reference, "País", "Código").unwrap();

        let registry = victimization_registry();
        let spec = reference_ranked_dots(
            &registry,
            Indicator::Victimization,
            2010,
            "Sexo",
            "Mujeres",
            &["Mujeres"],
            Some(&codes),
        )
        .unwrap();
        assert_eq!(spec.categories, vec!["URY", "PRY", "CHL"]);
    }
}
