use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Summary statistics for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name (display only; columns are identified by position).
    pub name: String,
    /// Declared element type, rendered as a string (e.g. "Int64").
    pub dtype: String,
    /// Number of null cells in the column.
    pub missing_count: usize,
    /// Percentage of null cells (0.0 - 100.0).
    pub missing_pct: f64,
    /// Number of distinct non-null values.
    pub n_unique: usize,
}

impl ColumnStats {
    /// Whether the column has no missing values.
    pub fn is_complete(&self) -> bool {
        self.missing_count == 0
    }
}

/// Whole-table profile: input shape plus one [`ColumnStats`] per column,
/// in the input table's column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    /// Shape of the profiled table as (rows, columns).
    pub shape: (usize, usize),
    /// Per-column statistics, in input column order.
    pub columns: Vec<ColumnStats>,
}

impl TableSummary {
    /// Row count of the profiled input table.
    pub fn n_rows(&self) -> usize {
        self.shape.0
    }

    /// Column count of the profiled input table.
    pub fn n_columns(&self) -> usize {
        self.shape.1
    }

    /// Look up a column's stats by name.
    ///
    /// Returns the first match in column order; with duplicate names the
    /// positional `columns` vector is the authoritative view.
    pub fn column(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Serialize the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
