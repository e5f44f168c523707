//! Chart resolution.
//!
//! Each [`ChartRequest`] maps to exactly one shaping call. Resolution
//! short-circuits to the empty spec when required selections are missing or
//! when the primary and held dimensions coincide, and converts every
//! shaping error to the empty spec: nothing here is ever surfaced to the
//! end user as text, the chart area simply renders blank.

use siv_charts::{
    breakdown_time_series, education_profile, education_year_bars, gini_comparison,
    latest_year_participation, ranked_country_bars, reference_ranked_dots, services_grouped_bars,
    sex_stacked_bars, year_grouped_bars, GiniWindow,
};
use siv_core::schema::{AREA, AREA_RURAL, AREA_URBAN, REFERENCE_YEARS, SEX, SEX_MEN, SEX_WOMEN};
use siv_core::{Breakdown, ChartSpec, SivResult};
use siv_data::{CountryCodes, DatasetRegistry, Indicator};
use tracing::debug;

use crate::selection::EducationComparison;

/// One chart's selections, ready to resolve.
#[derive(Debug, Clone)]
pub enum ChartRequest {
    HouseholdSizeBars {
        country: Option<String>,
        breakdown: Option<Breakdown>,
    },
    HouseholdSizeTrend {
        country: Option<String>,
    },
    WomenHomeLaborTrend {
        country: Option<String>,
        breakdown: Option<Breakdown>,
        held: Option<Breakdown>,
    },
    ParticipationByAge {
        country: Option<String>,
    },
    IncomeRatioRanking {
        year: Option<i32>,
    },
    IncomeRatioByEducation {
        country: Option<String>,
        area: Option<String>,
    },
    InformalEmploymentStack {
        country: Option<String>,
    },
    GiniComparison {
        area: Option<String>,
        window: Option<GiniWindow>,
    },
    EducationProfile {
        country: Option<String>,
        year: Option<i32>,
        comparison: EducationComparison,
    },
    BasicServicesBars {
        country: Option<String>,
        year: Option<i32>,
    },
    VictimizationDots {
        year: Option<i32>,
    },
    QuintileRatioDots {
        year: Option<i32>,
    },
}

/// Resolve one request to a chart spec, substituting the empty spec for
/// every failure.
pub fn resolve(
    registry: &DatasetRegistry,
    codes: Option<&CountryCodes>,
    request: &ChartRequest,
) -> ChartSpec {
    match shaped(registry, codes, request) {
        Ok(spec) => spec,
        Err(err) => {
            debug!(%err, "chart resolution fell back to the empty spec");
            ChartSpec::empty()
        }
    }
}

fn shaped(
    registry: &DatasetRegistry,
    codes: Option<&CountryCodes>,
    request: &ChartRequest,
) -> SivResult<ChartSpec> {
    match request {
        ChartRequest::HouseholdSizeBars { country, breakdown } => {
            let (Some(country), Some(breakdown)) = (country, breakdown) else {
                return Ok(ChartSpec::empty());
            };
            year_grouped_bars(
                registry,
                Indicator::HouseholdSize,
                country,
                *breakdown,
                &REFERENCE_YEARS,
            )
        }
        ChartRequest::HouseholdSizeTrend { country } => {
            let Some(country) = country else {
                return Ok(ChartSpec::empty());
            };
            breakdown_time_series(
                registry,
                Indicator::HouseholdSize,
                country,
                Breakdown::Quintile,
            )
        }
        ChartRequest::WomenHomeLaborTrend {
            country,
            breakdown,
            held,
        } => {
            let (Some(country), Some(breakdown)) = (country, breakdown) else {
                return Ok(ChartSpec::empty());
            };
            if *held == Some(*breakdown) {
                debug!(%breakdown, "held and series dimensions coincide");
                return Ok(ChartSpec::empty());
            }
            breakdown_time_series(registry, Indicator::WomenHomeLabor, country, *breakdown)
        }
        ChartRequest::ParticipationByAge { country } => {
            let Some(country) = country else {
                return Ok(ChartSpec::empty());
            };
            latest_year_participation(registry, Indicator::EconomicParticipation, country)
        }
        ChartRequest::IncomeRatioRanking { year } => {
            let Some(year) = year else {
                return Ok(ChartSpec::empty());
            };
            ranked_country_bars(registry, Indicator::IncomeRatioBySex, *year)
        }
        ChartRequest::IncomeRatioByEducation { country, area } => {
            let (Some(country), Some(area)) = (country, area) else {
                return Ok(ChartSpec::empty());
            };
            education_year_bars(
                registry,
                Indicator::IncomeRatioBySex,
                country,
                area,
                &REFERENCE_YEARS,
            )
        }
        ChartRequest::InformalEmploymentStack { country } => {
            let Some(country) = country else {
                return Ok(ChartSpec::empty());
            };
            sex_stacked_bars(registry, Indicator::InformalEmployment, country)
        }
        ChartRequest::GiniComparison { area, window } => {
            let (Some(area), Some(window)) = (area, window) else {
                return Ok(ChartSpec::empty());
            };
            gini_comparison(registry, Indicator::Gini, area, *window)
        }
        ChartRequest::EducationProfile {
            country,
            year,
            comparison,
        } => {
            let (Some(country), Some(year)) = (country, year) else {
                return Ok(ChartSpec::empty());
            };
            education_profile(
                registry,
                Indicator::AdultEducation,
                country,
                *year,
                comparison.pairs(),
            )
        }
        ChartRequest::BasicServicesBars { country, year } => {
            let (Some(country), Some(year)) = (country, year) else {
                return Ok(ChartSpec::empty());
            };
            services_grouped_bars(registry, Indicator::BasicServices, country, *year)
        }
        ChartRequest::VictimizationDots { year } => {
            let Some(year) = year else {
                return Ok(ChartSpec::empty());
            };
            reference_ranked_dots(
                registry,
                Indicator::Victimization,
                *year,
                SEX,
                SEX_WOMEN,
                &[SEX_MEN, SEX_WOMEN],
                codes,
            )
        }
        ChartRequest::QuintileRatioDots { year } => {
            let Some(year) = year else {
                return Ok(ChartSpec::empty());
            };
            reference_ranked_dots(
                registry,
                Indicator::QuintileRatio,
                *year,
                AREA,
                AREA_URBAN,
                &[AREA_URBAN, AREA_RURAL],
                codes,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn registry() -> DatasetRegistry {
        let household = df![
            "País" => &["Chile", "Chile"],
            "Años" => &["2002", "2019"],
            "valor" => &["3.8", "3.1"],
            "Área geográfica" => &["Nacional", "Nacional"],
            "Quintil" => &["Quintil 1", "Quintil 1"],
        ]
        .unwrap();
        let gini = df![
            "País" => &["X", "X"],
            "Años" => &[2002i32, 2018],
            "valor" => &[0.40, 0.46],
            "Área geográfica" => &["Nacional", "Nacional"],
        ]
        .unwrap();
        DatasetRegistry::from_frames([
            ("tamano_hogar".to_string(), household),
            ("gini".to_string(), gini),
        ])
    }

    #[test]
    fn test_incomplete_selection_short_circuits() {
        let spec = resolve(
            &registry(),
            None,
            &ChartRequest::HouseholdSizeBars {
                country: None,
                breakdown: Some(Breakdown::Quintile),
            },
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn test_conflicting_dimensions_short_circuit() {
        let spec = resolve(
            &registry(),
            None,
            &ChartRequest::WomenHomeLaborTrend {
                country: Some("Chile".into()),
                breakdown: Some(Breakdown::Area),
                held: Some(Breakdown::Area),
            },
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn test_missing_dataset_becomes_the_empty_spec() {
        // The registry has no participation table; the error stays inside.
        let spec = resolve(
            &registry(),
            None,
            &ChartRequest::ParticipationByAge {
                country: Some("Chile".into()),
            },
        );
        assert!(spec.is_empty());
    }

    #[test]
    fn test_complete_selection_resolves() {
        let spec = resolve(
            &registry(),
            None,
            &ChartRequest::GiniComparison {
                area: Some("Nacional".into()),
                window: Some(GiniWindow::Decade2000s),
            },
        );
        assert!(!spec.is_empty());
        assert_eq!(spec.series[0].name, "Increased Inequality");
    }

    #[test]
    fn test_trend_resolves_without_a_held_dimension() {
        let spec = resolve(
            &registry(),
            None,
            &ChartRequest::HouseholdSizeTrend {
                country: Some("Chile".into()),
            },
        );
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].x, Some(vec![2002.0, 2019.0]));
    }
}
