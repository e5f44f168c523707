//! Line-family charts.

use siv_core::schema::{AREA, COUNTRY, EDUCATION, SEX, YEAR};
use siv_core::{AxisMeta, Breakdown, ChartKind, ChartSeries, ChartSpec, SivResult};
use siv_data::{distinct_in_order, str_column, value_column, year_column, DatasetRegistry, Indicator};
use tracing::debug;

/// Display permutation of the four education levels: encounter order
/// `[a, b, c, d]` renders as `[a, d, b, c]`.
pub const EDUCATION_DISPLAY_ORDER: [usize; 4] = [0, 3, 1, 2];

/// Time series per category of the chosen breakdown, the other dimension
/// held at its aggregate sentinel. Years ascend along each trace.
pub fn breakdown_time_series(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
    breakdown: Breakdown,
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let series_of = str_column(df, breakdown.series_column())?;
    let (hold_column, hold_value) = breakdown.hold();
    let hold_of = str_column(df, hold_column)?;

    let slice: Vec<usize> = (0..df.height())
        .filter(|&i| country_of[i] == Some(country) && hold_of[i] == Some(hold_value))
        .collect();
    if slice.is_empty() {
        debug!(country, dataset = indicator.key(), "time series: empty slice");
        return Ok(ChartSpec::empty());
    }

    let category_slice: Vec<Option<&str>> = slice.iter().map(|&i| series_of[i]).collect();
    let categories = distinct_in_order(&category_slice);

    let mut series = Vec::with_capacity(categories.len());
    for category in &categories {
        let mut points: Vec<(i32, f64)> = slice
            .iter()
            .filter(|&&i| series_of[i] == Some(category.as_str()))
            .filter_map(|&i| Some((year_of[i]?, value_of[i]?)))
            .collect();
        points.sort_by_key(|(year, _)| *year);
        series.push(ChartSeries {
            name: category.clone(),
            values: points.iter().map(|(_, v)| *v).collect(),
            x: Some(points.iter().map(|(y, _)| *y as f64).collect()),
            labels: None,
        });
    }

    let mut axes = if indicator.percent_scale() {
        AxisMeta::percent()
    } else {
        AxisMeta::default()
    };
    axes.x_title = Some(YEAR.to_string());
    axes.x_tick = Some(1.0);

    Ok(ChartSpec {
        title: format!("{country} - {}", indicator.title()),
        kind: ChartKind::Line,
        categories: Vec::new(),
        series,
        axes,
        legend_title: Some("Desagregación".to_string()),
        ..ChartSpec::default()
    })
}

/// Education profile at one (country, year): the first (sex, area) pair as
/// bars, the second as a line, over the reordered education levels.
pub fn education_profile(
    registry: &DatasetRegistry,
    indicator: Indicator,
    country: &str,
    year: i32,
    pairs: [(&str, &str); 2],
) -> SivResult<ChartSpec> {
    let df = registry.get(indicator.key())?;
    let year_of = year_column(df)?;
    let value_of = value_column(df)?;
    let country_of = str_column(df, COUNTRY)?;
    let area_of = str_column(df, AREA)?;
    let sex_of = str_column(df, SEX)?;
    let education_of = str_column(df, EDUCATION)?;

    let slice: Vec<usize> = (0..df.height())
        .filter(|&i| {
            country_of[i] == Some(country)
                && year_of[i] == Some(year)
                && pairs
                    .iter()
                    .any(|&(sex, area)| sex_of[i] == Some(sex) && area_of[i] == Some(area))
        })
        .collect();
    if slice.is_empty() {
        debug!(country, year, dataset = indicator.key(), "education profile: empty slice");
        return Ok(ChartSpec::empty());
    }

    let education_slice: Vec<Option<&str>> = slice.iter().map(|&i| education_of[i]).collect();
    let mut categories = distinct_in_order(&education_slice);
    if categories.len() == EDUCATION_DISPLAY_ORDER.len() {
        categories = EDUCATION_DISPLAY_ORDER
            .iter()
            .map(|&i| categories[i].clone())
            .collect();
    }

    let mut series = Vec::with_capacity(2);
    for (sex, area) in pairs {
        let mut values = Vec::new();
        for category in &categories {
            let hit = slice.iter().find(|&&i| {
                sex_of[i] == Some(sex)
                    && area_of[i] == Some(area)
                    && education_of[i] == Some(category.as_str())
            });
            if let Some(v) = hit.and_then(|&i| value_of[i]) {
                values.push(v);
            }
        }
        series.push(ChartSeries::new(format!("{sex} - {area}"), values));
    }

    Ok(ChartSpec {
        title: format!("{country} - {year}"),
        kind: ChartKind::BarsWithLine,
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
    use polars::prelude::*;
    use siv_core::schema::{AREA_RURAL, AREA_URBAN, SEX_WOMEN};

    fn household_registry() -> DatasetRegistry {
        let df = df![
            "País" => &["Chile"; 6],
            "Años" => &["2010", "2002", "2019", "2002", "2010", "2019"],
            "valor" => &["3.4", "3.8", "3.1", "4.4", "4.2", "4.0"],
            "Área geográfica" => &["Nacional"; 6],
            "Quintil" => &["Quintil 1", "Quintil 1", "Quintil 1", "Quintil 2", "Quintil 2", "Quintil 2"],
        ]
        .unwrap();
        DatasetRegistry::from_frames([("tamano_hogar".to_string(), df)])
    }

    #[test]
    fn test_time_series_orders_years_ascending_per_trace() {
        let registry = household_registry();
        let spec = breakdown_time_series(
            &registry,
            Indicator::HouseholdSize,
            "Chile",
            Breakdown::Quintile,
        )
        .unwrap();

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].name, "Quintil 1");
        assert_eq!(spec.series[0].x, Some(vec![2002.0, 2010.0, 2019.0]));
        assert_eq!(spec.series[0].values, vec![3.8, 3.4, 3.1]);
        assert_eq!(spec.legend_title.as_deref(), Some("Desagregación"));
    }

    #[test]
    fn test_time_series_unknown_country_is_the_empty_spec() {
        let registry = household_registry();
        let spec = breakdown_time_series(
            &registry,
            Indicator::HouseholdSize,
            "Atlántida",
            Breakdown::Area,
        )
        .unwrap();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_education_profile_applies_the_display_permutation() {
        let levels = ["Primaria incompleta", "Primaria completa", "Secundaria", "Terciaria"];
        let df = df![
            "País" => &["Chile"; 8],
            "Años" => &[2019i32; 8],
            "valor" => &[30.0, 25.0, 35.0, 10.0, 45.0, 30.0, 20.0, 5.0],
            "Sexo" => &["Mujeres"; 8],
            "Área geográfica" => &[
                "Urbana", "Urbana", "Urbana", "Urbana",
                "Rural", "Rural", "Rural", "Rural",
            ],
            "Escolaridad (EH)" => &[
                levels[0], levels[1], levels[2], levels[3],
                levels[0], levels[1], levels[2], levels[3],
            ],
        ]
        .unwrap();
        let registry =
            DatasetRegistry::from_frames([("poblacion_adulta_escolaridad".to_string(), df)]);

        let spec = education_profile(
            &registry,
            Indicator::AdultEducation,
            "Chile",
            2019,
            [(SEX_WOMEN, AREA_URBAN), (SEX_WOMEN, AREA_RURAL)],
        )
        .unwrap();

        // Encounter order [a, b, c, d] renders as [a, d, b, c].
        assert_eq!(
            spec.categories,
            vec![levels[0], levels[3], levels[1], levels[2]]
        );
        assert_eq!(spec.kind, ChartKind::BarsWithLine);
        assert_eq!(spec.series[0].name, "Mujeres - Urbana");
        assert_eq!(spec.series[0].values, vec![30.0, 10.0, 25.0, 35.0]);
        assert_eq!(spec.series[1].values, vec![45.0, 5.0, 30.0, 20.0]);
    }

    #[test]
    fn test_education_profile_missing_year_is_the_empty_spec() {
        let df = df![
            "País" => &["Chile"],
            "Años" => &[2019i32],
            "valor" => &[30.0],
            "Sexo" => &["Mujeres"],
            "Área geográfica" => &["Urbana"],
            "Escolaridad (EH)" => &["Total"],
        ]
        .unwrap();
        let registry =
            DatasetRegistry::from_frames([("poblacion_adulta_escolaridad".to_string(), df)]);

        let spec = education_profile(
            &registry,
            Indicator::AdultEducation,
            "Chile",
            2002,
            [(SEX_WOMEN, AREA_URBAN), (SEX_WOMEN, AREA_RURAL)],
        )
        .unwrap();
        assert!(spec.is_empty());
    }
}
