//! Per-Column Summary Statistics
//!
//! A small library for profiling tabular datasets built on Polars.
//!
//! # Overview
//!
//! Given a [`DataFrame`](polars::prelude::DataFrame), [`StatsReporter`] derives a
//! summary table with one row per input column and three derived fields:
//!
//! - **DataTypes**: the declared element type of the column
//! - **MissingPct**: percentage of rows whose value is null (0-100)
//! - **NUnique**: count of distinct non-null values
//!
//! The summary can be rendered to stdout, written to any sink, or obtained as a
//! typed, serializable [`TableSummary`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use frame_stats::StatsReporter;
//! use polars::prelude::*;
//!
//! let df = df!(
//!     "age" => &[Some(25i64), Some(30), None],
//!     "name" => &["Al", "Bo", "Al"],
//! )?;
//!
//! // Print the rendered summary table
//! StatsReporter::report(&df)?;
//!
//! // Or work with the typed profile
//! let summary = StatsReporter::profile(&df)?;
//! for col in &summary.columns {
//!     println!("{}: {:.2}% missing, {} distinct", col.name, col.missing_pct, col.n_unique);
//! }
//! ```
//!
//! # Missing-Value Semantics
//!
//! A cell is *absent* when Polars considers it null. Float `NaN` and empty
//! strings are present values. Distinct counts are taken over non-null values
//! only, and a table with zero rows reports `MissingPct = 0.0` for every column
//! rather than an indeterminate 0/0 result.

pub mod error;
pub mod profiler;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use error::{Result, StatsError};
pub use profiler::StatsReporter;
pub use types::{ColumnStats, TableSummary};
pub use utils::{
    DtypeCategory, dtype_display, get_dtype_category, is_boolean_dtype, is_datetime_dtype,
    is_numeric_dtype,
};
