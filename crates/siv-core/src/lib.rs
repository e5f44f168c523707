//! # siv-core: Indicator Dashboard Core Types
//!
//! Shared foundation for the siv workspace: the unified error type, the
//! `ChartSpec` output contract handed to rendering front ends, and the
//! dataset vocabulary (column names, sentinel categories, reference years)
//! that every other crate filters against.
//!
//! ## Design Philosophy
//!
//! Shaping is **pure per invocation**: a chart spec is derived fresh from an
//! immutable dataset slice and the current selection, and nothing in this
//! crate holds mutable state. Errors carry enough context to be logged, but
//! they are converted to the explicit empty chart at the resolution
//! boundary rather than surfaced to users.

pub mod chart;
pub mod error;
pub mod schema;

pub use chart::{AxisMeta, ChartKind, ChartSeries, ChartSpec, ReferenceLine};
pub use error::{SivError, SivResult};
pub use schema::Breakdown;
