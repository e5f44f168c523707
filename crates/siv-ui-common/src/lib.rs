//! # siv UI Common
//!
//! Shared selection state and chart resolution for the dashboard front
//! ends.
//!
//! ## Architecture
//!
//! ```text
//! dashboard shell ──► InputEvent ──► DashboardState ──► ChartRequest
//!                                                          │
//!                        rendering ◄── ChartSpec ◄── resolve(registry, …)
//! ```
//!
//! A widget change becomes an [`InputEvent`]; [`DashboardState`] applies it
//! and names the charts whose specs must be re-derived; [`resolve`] turns
//! each request into a fresh [`ChartSpec`](siv_core::ChartSpec), falling
//! back to the explicit empty spec whenever a selection is incomplete,
//! conflicting, or the slice misbehaves. All of it is synchronous and
//! single-user; the only mutable state is the selections themselves and the
//! toggle-button styles.

pub mod buttons;
pub mod config;
pub mod error;
pub mod events;
pub mod resolve;
pub mod selection;

// Re-exports for convenience
pub use buttons::{resolve_click, GroupState, SlotStyle, ToggleGroup};
pub use config::{DataConfig, SivConfig};
pub use error::{Error, Result};
pub use events::{EducationButton, InputEvent};
pub use resolve::{resolve, ChartRequest};
pub use selection::{ChartId, DashboardState, EducationComparison};
