//! # siv-charts: Filter-and-Shape Functions
//!
//! One function per chart type. Every function follows the same recipe:
//! fetch the named dataset from the registry, coerce years and values on
//! owned column vectors (the registered frame is never touched), narrow the
//! rows with the chart's fixed equality predicates, and emit a
//! [`ChartSpec`](siv_core::ChartSpec).
//!
//! Shaping is total over valid selections and loud about invalid ones: an
//! empty slice, a missing dimension column, or an unparsable cell comes back
//! as a [`SivError`](siv_core::SivError) (or, where the chart contract says
//! so, the explicit empty spec). Conversion of errors to blank charts is the
//! resolution layer's job, not ours.

pub mod bars;
pub mod lines;
pub mod points;

pub use bars::{
    education_year_bars, latest_year_participation, ranked_country_bars, services_grouped_bars,
    sex_stacked_bars, year_grouped_bars,
};
pub use lines::{breakdown_time_series, education_profile, EDUCATION_DISPLAY_ORDER};
pub use points::{gini_comparison, reference_ranked_dots, GiniWindow};
