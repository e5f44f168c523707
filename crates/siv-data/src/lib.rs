//! # siv-data: Dataset Registry & Typed Access
//!
//! Loads the indicator tables into immutable in-memory frames at startup and
//! gives the shaping layer typed access to their columns.
//!
//! ## Design Philosophy
//!
//! **Load once, never mutate**: the registry is built once from CSV sources
//! and handed around by shared reference. Functions that need coerced column
//! types work on copies or on owned column vectors, so the registered
//! frames stay exactly as loaded.
//!
//! **Fail fast at startup, never afterwards**: an unreadable dataset file
//! aborts registry construction; every later lookup failure is an ordinary
//! [`SivError`](siv_core::SivError) that chart resolution converts to the
//! empty chart.

pub mod countries;
pub mod frame;
pub mod indicator;
pub mod registry;

pub use countries::CountryCodes;
pub use frame::{distinct_in_order, str_column, value_column, year_column};
pub use indicator::Indicator;
pub use registry::DatasetRegistry;
