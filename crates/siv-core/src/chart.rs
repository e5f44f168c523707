//! The chart specification handed to rendering front ends.
//!
//! A [`ChartSpec`] is the complete, renderer-neutral description of one
//! chart: ordered category labels, one or more named series aligned to them,
//! and display metadata. Specs are produced fresh on every resolution and
//! never persisted. [`ChartSpec::empty`] is the explicit "no chart" value
//! substituted whenever a selection is incomplete or a slice comes back
//! empty.

use serde::Serialize;

/// How the series of a spec should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Nothing to draw; the chart area renders blank.
    #[default]
    Empty,
    /// One bar group per category, one bar per series.
    GroupedBars,
    /// Bars stacked per category.
    StackedBars,
    /// One line per series over the category axis (or per-series x values).
    Line,
    /// First series as bars, remaining series as lines, shared categories.
    BarsWithLine,
    /// Free x/y points; each series carries its own x values.
    Scatter,
    /// One marker series per category value over a shared ordering axis.
    Dots,
}

/// One named trace of a chart.
///
/// `values` is the y sequence. Bar-family charts align it to the chart's
/// `categories`; a dataset missing some categories simply yields a shorter
/// sequence. Line and scatter traces carry their own `x` values instead.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,

    /// Per-point x values for line/scatter traces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,

    /// Per-point text labels (e.g. country names on a comparison scatter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        ChartSeries {
            name: name.into(),
            values,
            x: None,
            labels: None,
        }
    }
}

/// A straight guide line drawn over the data.
///
/// Coordinates are in value space; on a category axis the x coordinates are
/// category indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Axis titles and fixed ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct AxisMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,

    /// Fixed tick step on the x axis; 1 on year axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick: Option<f64>,

    /// Fixed y range; `[0, 100]` for percent-scale indicators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,

    /// Fixed tick step on the y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick: Option<f64>,
}

impl AxisMeta {
    /// The fixed `[0, 100]` / tick-10 axis used by percent-scale indicators.
    pub fn percent() -> Self {
        AxisMeta {
            y_range: Some([0.0, 100.0]),
            y_tick: Some(10.0),
            ..AxisMeta::default()
        }
    }
}

/// The resolved chart: data plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub axes: AxisMeta,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_line: Option<ReferenceLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
}

impl ChartSpec {
    /// The explicit "no chart" result.
    pub fn empty() -> Self {
        ChartSpec::default()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
