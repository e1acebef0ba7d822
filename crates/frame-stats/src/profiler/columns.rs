//! Per-column statistics extraction.

use crate::error::Result;
use crate::types::ColumnStats;
use crate::utils::dtype_display;
use polars::prelude::*;

/// Percentage of missing values given a null count and total row count.
///
/// A zero-row table reports 0.0 instead of the indeterminate 0/0 form.
pub(crate) fn missing_percentage(null_count: usize, height: usize) -> f64 {
    if height > 0 {
        (null_count as f64 / height as f64) * 100.0
    } else {
        0.0
    }
}

/// Count distinct non-null values. Nulls are dropped first so a null cell
/// never contributes to the count.
pub(crate) fn distinct_count(series: &Series) -> Result<usize> {
    Ok(series.drop_nulls().n_unique()?)
}

/// Extract summary statistics for one column.
pub(crate) fn column_stats(series: &Series, height: usize) -> Result<ColumnStats> {
    let null_count = series.null_count();

    Ok(ColumnStats {
        name: series.name().to_string(),
        dtype: dtype_display(series.dtype()),
        missing_count: null_count,
        missing_pct: missing_percentage(null_count, height),
        n_unique: distinct_count(series)?,
    })
}
