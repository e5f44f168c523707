//! Input events for reactive chart updates.

use siv_charts::GiniWindow;
use siv_core::Breakdown;

use crate::selection::ChartId;

/// The four education toggle buttons.
///
/// All four share one capacity-2 activation budget, so any two may be
/// highlighted at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationButton {
    UrbanMen,
    UrbanWomen,
    RuralMen,
    RuralWomen,
}

impl EducationButton {
    /// Slot position inside the education scope.
    pub fn slot(&self) -> usize {
        match self {
            EducationButton::UrbanMen => 0,
            EducationButton::UrbanWomen => 1,
            EducationButton::RuralMen => 2,
            EducationButton::RuralWomen => 3,
        }
    }
}

/// One widget change, routed to the owning chart's selection.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A country dropdown changed.
    CountrySelected {
        chart: ChartId,
        country: Option<String>,
    },

    /// A breakdown (desagregación) dropdown changed.
    BreakdownSelected {
        chart: ChartId,
        breakdown: Option<Breakdown>,
    },

    /// The held-dimension selector of a trend chart changed.
    HeldBreakdownSelected {
        chart: ChartId,
        breakdown: Option<Breakdown>,
    },

    /// An area dropdown changed.
    AreaSelected {
        chart: ChartId,
        area: Option<String>,
    },

    /// A year dropdown or slider changed.
    YearSelected { chart: ChartId, year: Option<i32> },

    /// The Gini comparison window changed.
    WindowSelected { window: Option<GiniWindow> },

    /// An education toggle button was clicked.
    ToggleClicked { button: EducationButton, clicks: u32 },
}
