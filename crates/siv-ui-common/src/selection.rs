//! Per-chart selection state.
//!
//! [`DashboardState`] owns the current widget values of every chart page
//! plus the education toggle buttons. Applying an [`InputEvent`] mutates
//! exactly one selection and names the charts whose specs must be
//! re-derived; everything downstream stays pure.

use std::fmt;

use siv_charts::GiniWindow;
use siv_core::schema::{AREA_RURAL, AREA_URBAN, SEX_MEN, SEX_WOMEN};
use siv_core::Breakdown;

use crate::buttons::{resolve_click, SlotStyle};
use crate::events::{EducationButton, InputEvent};
use crate::resolve::ChartRequest;

/// The twelve charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    HouseholdSizeBars,
    HouseholdSizeTrend,
    WomenHomeLaborTrend,
    ParticipationByAge,
    IncomeRatioRanking,
    IncomeRatioByEducation,
    InformalEmploymentStack,
    GiniComparison,
    EducationProfile,
    BasicServicesBars,
    VictimizationDots,
    QuintileRatioDots,
}

impl ChartId {
    /// All charts, in dashboard page order.
    pub const ALL: &'static [ChartId] = &[
        ChartId::HouseholdSizeBars,
        ChartId::HouseholdSizeTrend,
        ChartId::WomenHomeLaborTrend,
        ChartId::ParticipationByAge,
        ChartId::IncomeRatioRanking,
        ChartId::IncomeRatioByEducation,
        ChartId::InformalEmploymentStack,
        ChartId::GiniComparison,
        ChartId::EducationProfile,
        ChartId::BasicServicesBars,
        ChartId::VictimizationDots,
        ChartId::QuintileRatioDots,
    ];

    /// Stable string key (CLI argument, widget id).
    pub fn key(&self) -> &'static str {
        match self {
            ChartId::HouseholdSizeBars => "household-size-bars",
            ChartId::HouseholdSizeTrend => "household-size-trend",
            ChartId::WomenHomeLaborTrend => "women-home-labor-trend",
            ChartId::ParticipationByAge => "participation-by-age",
            ChartId::IncomeRatioRanking => "income-ratio-ranking",
            ChartId::IncomeRatioByEducation => "income-ratio-by-education",
            ChartId::InformalEmploymentStack => "informal-employment",
            ChartId::GiniComparison => "gini-comparison",
            ChartId::EducationProfile => "education-profile",
            ChartId::BasicServicesBars => "basic-services",
            ChartId::VictimizationDots => "victimization",
            ChartId::QuintileRatioDots => "quintile-ratio",
        }
    }

    /// Look a chart up by its key.
    pub fn from_key(key: &str) -> Option<ChartId> {
        ChartId::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The two (sex, area) pairs drawn by the education profile chart.
///
/// Exhaustive mapping from the four toggle buttons. Since the buttons share
/// a capacity-2 budget with no further constraint, both slots of one area
/// can be highlighted at once; fewer than two active buttons fall back to
/// the women/women default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationComparison {
    UrbanMenRuralMen,
    UrbanMenRuralWomen,
    UrbanWomenRuralMen,
    UrbanMenWomen,
    RuralMenWomen,
    UrbanWomenRuralWomen,
}

impl EducationComparison {
    pub fn from_slots(slots: [SlotStyle; 4]) -> Self {
        let [urban_men, urban_women, rural_men, rural_women] =
            slots.map(|s| s == SlotStyle::Active);
        if urban_men && rural_men {
            EducationComparison::UrbanMenRuralMen
        } else if urban_men && rural_women {
            EducationComparison::UrbanMenRuralWomen
        } else if urban_women && rural_men {
            EducationComparison::UrbanWomenRuralMen
        } else if urban_men && urban_women {
            EducationComparison::UrbanMenWomen
        } else if rural_men && rural_women {
            EducationComparison::RuralMenWomen
        } else {
            EducationComparison::UrbanWomenRuralWomen
        }
    }

    /// The (sex, area) filter pairs; the first renders as bars, the second
    /// as a line.
    pub fn pairs(&self) -> [(&'static str, &'static str); 2] {
        match self {
            EducationComparison::UrbanMenRuralMen => {
                [(SEX_MEN, AREA_URBAN), (SEX_MEN, AREA_RURAL)]
            }
            EducationComparison::UrbanMenRuralWomen => {
                [(SEX_MEN, AREA_URBAN), (SEX_WOMEN, AREA_RURAL)]
            }
            EducationComparison::UrbanWomenRuralMen => {
                [(SEX_WOMEN, AREA_URBAN), (SEX_MEN, AREA_RURAL)]
            }
            EducationComparison::UrbanMenWomen => {
                [(SEX_MEN, AREA_URBAN), (SEX_WOMEN, AREA_URBAN)]
            }
            EducationComparison::RuralMenWomen => {
                [(SEX_MEN, AREA_RURAL), (SEX_WOMEN, AREA_RURAL)]
            }
            EducationComparison::UrbanWomenRuralWomen => {
                [(SEX_WOMEN, AREA_URBAN), (SEX_WOMEN, AREA_RURAL)]
            }
        }
    }
}

/// Activation budget shared by the four education buttons.
const EDUCATION_SCOPE_CAPACITY: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct CountrySelection {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HouseholdBarsSelection {
    pub country: Option<String>,
    pub breakdown: Option<Breakdown>,
}

#[derive(Debug, Clone, Default)]
pub struct TrendSelection {
    pub country: Option<String>,
    pub breakdown: Option<Breakdown>,
    /// Secondary (held) dimension; selecting the same dimension twice is a
    /// conflict that resolves to the empty chart.
    pub held: Option<Breakdown>,
}

#[derive(Debug, Clone, Default)]
pub struct YearSelection {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CountryAreaSelection {
    pub country: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GiniSelection {
    pub area: Option<String>,
    pub window: Option<GiniWindow>,
}

#[derive(Debug, Clone, Default)]
pub struct EducationSelection {
    pub country: Option<String>,
    pub year: Option<i32>,
    /// Styles of the four buttons, in [`EducationButton::slot`] order.
    pub buttons: [SlotStyle; 4],
}

#[derive(Debug, Clone, Default)]
pub struct CountryYearSelection {
    pub country: Option<String>,
    pub year: Option<i32>,
}

/// Current widget values of every chart page.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub household_bars: HouseholdBarsSelection,
    pub household_trend: CountrySelection,
    pub women_home_labor: TrendSelection,
    pub participation: CountrySelection,
    pub income_ranking: YearSelection,
    pub income_by_education: CountryAreaSelection,
    pub informal: CountrySelection,
    pub gini: GiniSelection,
    pub education: EducationSelection,
    pub services: CountryYearSelection,
    pub victimization: YearSelection,
    pub quintile_ratio: YearSelection,
}

impl DashboardState {
    pub fn new() -> Self {
        DashboardState::default()
    }

    /// Apply one widget change; returns the charts to re-derive.
    pub fn apply(&mut self, event: &InputEvent) -> Vec<ChartId> {
        match event {
            InputEvent::CountrySelected { chart, country } => {
                let country = country.clone();
                match chart {
                    ChartId::HouseholdSizeBars => self.household_bars.country = country,
                    ChartId::HouseholdSizeTrend => self.household_trend.country = country,
                    ChartId::WomenHomeLaborTrend => self.women_home_labor.country = country,
                    ChartId::ParticipationByAge => self.participation.country = country,
                    ChartId::IncomeRatioByEducation => self.income_by_education.country = country,
                    ChartId::InformalEmploymentStack => self.informal.country = country,
                    ChartId::EducationProfile => self.education.country = country,
                    ChartId::BasicServicesBars => self.services.country = country,
                    _ => return Vec::new(),
                }
                vec![*chart]
            }
            InputEvent::BreakdownSelected { chart, breakdown } => {
                match chart {
                    ChartId::HouseholdSizeBars => self.household_bars.breakdown = *breakdown,
                    ChartId::WomenHomeLaborTrend => self.women_home_labor.breakdown = *breakdown,
                    _ => return Vec::new(),
                }
                vec![*chart]
            }
            InputEvent::HeldBreakdownSelected { chart, breakdown } => {
                match chart {
                    ChartId::WomenHomeLaborTrend => self.women_home_labor.held = *breakdown,
                    _ => return Vec::new(),
                }
                vec![*chart]
            }
            InputEvent::AreaSelected { chart, area } => {
                let area = area.clone();
                match chart {
                    ChartId::IncomeRatioByEducation => self.income_by_education.area = area,
                    ChartId::GiniComparison => self.gini.area = area,
                    _ => return Vec::new(),
                }
                vec![*chart]
            }
            InputEvent::YearSelected { chart, year } => {
                match chart {
                    ChartId::IncomeRatioRanking => self.income_ranking.year = *year,
                    ChartId::EducationProfile => self.education.year = *year,
                    ChartId::BasicServicesBars => self.services.year = *year,
                    ChartId::VictimizationDots => self.victimization.year = *year,
                    ChartId::QuintileRatioDots => self.quintile_ratio.year = *year,
                    _ => return Vec::new(),
                }
                vec![*chart]
            }
            InputEvent::WindowSelected { window } => {
                self.gini.window = *window;
                vec![ChartId::GiniComparison]
            }
            InputEvent::ToggleClicked { button, clicks } => {
                let slot = button.slot();
                let active_elsewhere = self
                    .education
                    .buttons
                    .iter()
                    .enumerate()
                    .filter(|&(i, &style)| i != slot && style == SlotStyle::Active)
                    .count();
                self.education.buttons[slot] = resolve_click(
                    *clicks,
                    self.education.buttons[slot],
                    active_elsewhere,
                    EDUCATION_SCOPE_CAPACITY,
                    true,
                );
                vec![ChartId::EducationProfile]
            }
        }
    }

    /// Build the resolution request for one chart from the current state.
    pub fn request(&self, chart: ChartId) -> ChartRequest {
        match chart {
            ChartId::HouseholdSizeBars => ChartRequest::HouseholdSizeBars {
                country: self.household_bars.country.clone(),
                breakdown: self.household_bars.breakdown,
            },
            ChartId::HouseholdSizeTrend => ChartRequest::HouseholdSizeTrend {
                country: self.household_trend.country.clone(),
            },
            ChartId::WomenHomeLaborTrend => ChartRequest::WomenHomeLaborTrend {
                country: self.women_home_labor.country.clone(),
                breakdown: self.women_home_labor.breakdown,
                held: self.women_home_labor.held,
            },
            ChartId::ParticipationByAge => ChartRequest::ParticipationByAge {
                country: self.participation.country.clone(),
            },
            ChartId::IncomeRatioRanking => ChartRequest::IncomeRatioRanking {
                year: self.income_ranking.year,
            },
            ChartId::IncomeRatioByEducation => ChartRequest::IncomeRatioByEducation {
                country: self.income_by_education.country.clone(),
                area: self.income_by_education.area.clone(),
            },
            ChartId::InformalEmploymentStack => ChartRequest::InformalEmploymentStack {
                country: self.informal.country.clone(),
            },
            ChartId::GiniComparison => ChartRequest::GiniComparison {
                area: self.gini.area.clone(),
                window: self.gini.window,
            },
            ChartId::EducationProfile => ChartRequest::EducationProfile {
                country: self.education.country.clone(),
                year: self.education.year,
                comparison: EducationComparison::from_slots(self.education.buttons),
            },
            ChartId::BasicServicesBars => ChartRequest::BasicServicesBars {
                country: self.services.country.clone(),
                year: self.services.year,
            },
            ChartId::VictimizationDots => ChartRequest::VictimizationDots {
                year: self.victimization.year,
            },
            ChartId::QuintileRatioDots => ChartRequest::QuintileRatioDots {
                year: self.quintile_ratio.year,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_keys_round_trip() {
        for chart in ChartId::ALL {
            assert_eq!(ChartId::from_key(chart.key()), Some(*chart));
        }
        assert_eq!(ChartId::from_key("sparklines"), None);
    }

    #[test]
    fn test_country_event_touches_only_its_chart() {
        let mut state = DashboardState::new();
        let affected = state.apply(&InputEvent::CountrySelected {
            chart: ChartId::HouseholdSizeBars,
            country: Some("Chile".into()),
        });
        assert_eq!(affected, vec![ChartId::HouseholdSizeBars]);
        assert_eq!(state.household_bars.country.as_deref(), Some("Chile"));
        assert_eq!(state.household_trend.country, None);
    }

    #[test]
    fn test_year_event_on_a_yearless_chart_is_ignored() {
        let mut state = DashboardState::new();
        let affected = state.apply(&InputEvent::YearSelected {
            chart: ChartId::HouseholdSizeTrend,
            year: Some(2019),
        });
        assert!(affected.is_empty());
    }

    const ON: SlotStyle = SlotStyle::Active;
    const OFF: SlotStyle = SlotStyle::Inactive;

    #[test]
    fn test_education_comparison_defaults_on_incomplete_selection() {
        // Nothing active, and a single active button, both fall back to the
        // women/women default.
        let none = EducationComparison::from_slots([OFF, OFF, OFF, OFF]);
        assert_eq!(none, EducationComparison::UrbanWomenRuralWomen);

        let only_one = EducationComparison::from_slots([ON, OFF, OFF, OFF]);
        assert_eq!(only_one, EducationComparison::UrbanWomenRuralWomen);

        let cross = EducationComparison::from_slots([ON, OFF, OFF, ON]);
        assert_eq!(cross, EducationComparison::UrbanMenRuralWomen);
        assert_eq!(
            cross.pairs(),
            [(SEX_MEN, AREA_URBAN), (SEX_WOMEN, AREA_RURAL)]
        );
    }

    #[test]
    fn test_education_comparison_same_area_pairs() {
        // Both buttons of one area can be active at once; bars take the men
        // trace, the line the women trace.
        let urban = EducationComparison::from_slots([ON, ON, OFF, OFF]);
        assert_eq!(urban, EducationComparison::UrbanMenWomen);
        assert_eq!(
            urban.pairs(),
            [(SEX_MEN, AREA_URBAN), (SEX_WOMEN, AREA_URBAN)]
        );

        let rural = EducationComparison::from_slots([OFF, OFF, ON, ON]);
        assert_eq!(rural, EducationComparison::RuralMenWomen);
        assert_eq!(
            rural.pairs(),
            [(SEX_MEN, AREA_RURAL), (SEX_WOMEN, AREA_RURAL)]
        );
    }

    #[test]
    fn test_toggle_click_activates_one_button() {
        let mut state = DashboardState::new();
        let affected = state.apply(&InputEvent::ToggleClicked {
            button: EducationButton::UrbanMen,
            clicks: 1,
        });
        assert_eq!(affected, vec![ChartId::EducationProfile]);
        assert_eq!(state.education.buttons, [ON, OFF, OFF, OFF]);
    }

    #[test]
    fn test_toggle_reclick_deactivates() {
        let mut state = DashboardState::new();
        state.education.buttons = [ON, OFF, OFF, OFF];
        state.apply(&InputEvent::ToggleClicked {
            button: EducationButton::UrbanMen,
            clicks: 2,
        });
        assert_eq!(state.education.buttons, [OFF, OFF, OFF, OFF]);
    }

    #[test]
    fn test_toggle_allows_both_buttons_of_one_area() {
        let mut state = DashboardState::new();
        state.education.buttons = [ON, OFF, OFF, OFF];
        state.apply(&InputEvent::ToggleClicked {
            button: EducationButton::UrbanWomen,
            clicks: 1,
        });
        assert_eq!(state.education.buttons, [ON, ON, OFF, OFF]);
    }

    #[test]
    fn test_toggle_shared_budget_blocks_third_activation() {
        let mut state = DashboardState::new();
        state.education.buttons = [ON, OFF, OFF, ON];
        state.apply(&InputEvent::ToggleClicked {
            button: EducationButton::RuralMen,
            clicks: 1,
        });
        assert_eq!(state.education.buttons, [ON, OFF, OFF, ON]);
    }
}
