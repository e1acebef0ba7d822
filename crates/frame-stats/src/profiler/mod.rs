//! Column profiling for tabular datasets.
//!
//! This module derives a per-column summary of a DataFrame:
//! - declared data type
//! - percentage of missing (null) values
//! - count of distinct non-null values

mod columns;

use crate::error::Result;
use crate::types::TableSummary;
use polars::prelude::*;
use std::io::Write;
use tracing::debug;

/// Summary-statistics reporter for tabular datasets.
pub struct StatsReporter;

impl StatsReporter {
    /// Profile a DataFrame into a typed per-column summary.
    ///
    /// Columns are visited positionally in the input's column order, so the
    /// result always has exactly one entry per input column even when names
    /// collide. The input is never mutated.
    pub fn profile(df: &DataFrame) -> Result<TableSummary> {
        let mut stats = Vec::with_capacity(df.width());

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            stats.push(columns::column_stats(series, df.height())?);
        }

        debug!("Profiled dataset: {:?}", df.shape());

        Ok(TableSummary {
            shape: (df.height(), df.width()),
            columns: stats,
        })
    }

    /// Build the derived summary DataFrame.
    ///
    /// One row per input column, with the column name as a display field and
    /// three derived fields: `DataTypes`, `MissingPct` and `NUnique`.
    /// `NUnique` is carried as a float to match the summary's numeric layout.
    pub fn summarize(df: &DataFrame) -> Result<DataFrame> {
        let profile = Self::profile(df)?;

        let mut names = Vec::with_capacity(profile.columns.len());
        let mut dtypes = Vec::with_capacity(profile.columns.len());
        let mut missing = Vec::with_capacity(profile.columns.len());
        let mut n_unique = Vec::with_capacity(profile.columns.len());

        for col in &profile.columns {
            names.push(col.name.clone());
            dtypes.push(col.dtype.clone());
            missing.push(col.missing_pct);
            n_unique.push(col.n_unique as f64);
        }

        let summary = DataFrame::new(vec![
            Column::new("Column".into(), names),
            Column::new("DataTypes".into(), dtypes),
            Column::new("MissingPct".into(), missing),
            Column::new("NUnique".into(), n_unique),
        ])?;

        Ok(summary)
    }

    /// Compute the summary and write its default table rendering to a sink.
    pub fn write_summary<W: Write>(df: &DataFrame, writer: &mut W) -> Result<()> {
        let summary = Self::summarize(df)?;
        writeln!(writer, "{}", summary)?;
        Ok(())
    }

    /// Compute the summary and print it to stdout.
    pub fn report(df: &DataFrame) -> Result<()> {
        let stdout = std::io::stdout();
        Self::write_summary(df, &mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people_df() -> DataFrame {
        df!(
            "age" => &[Some(25i64), Some(30), None],
            "name" => &["Al", "Bo", "Al"],
        )
        .unwrap()
    }

    fn f64_at(df: &DataFrame, col: &str, idx: usize) -> f64 {
        df.column(col)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(idx)
            .unwrap()
    }

    fn str_at<'a>(df: &'a DataFrame, col: &str, idx: usize) -> &'a str {
        df.column(col)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(idx)
            .unwrap()
    }

    #[test]
    fn test_profile_shape_and_order() {
        let df = people_df();
        let summary = StatsReporter::profile(&df).unwrap();

        assert_eq!(summary.shape, (3, 2));
        assert_eq!(summary.columns.len(), 2);
        assert_eq!(summary.columns[0].name, "age");
        assert_eq!(summary.columns[1].name, "name");
    }

    #[test]
    fn test_summarize_mixed_columns() {
        let df = people_df();
        let summary = StatsReporter::summarize(&df).unwrap();

        assert_eq!(summary.height(), 2);
        assert_eq!(
            summary.get_column_names_str(),
            &["Column", "DataTypes", "MissingPct", "NUnique"]
        );

        assert_eq!(str_at(&summary, "Column", 0), "age");
        assert_eq!(str_at(&summary, "DataTypes", 0), "Int64");
        assert!((f64_at(&summary, "MissingPct", 0) - 33.33).abs() < 0.01);
        assert_eq!(f64_at(&summary, "NUnique", 0), 2.0);

        assert_eq!(str_at(&summary, "Column", 1), "name");
        assert_eq!(str_at(&summary, "DataTypes", 1), "String");
        assert_eq!(f64_at(&summary, "MissingPct", 1), 0.0);
        assert_eq!(f64_at(&summary, "NUnique", 1), 2.0);
    }

    #[test]
    fn test_summarize_empty_table() {
        let df = DataFrame::empty();
        let summary = StatsReporter::summarize(&df).unwrap();

        assert_eq!(summary.height(), 0);
    }

    #[test]
    fn test_summarize_zero_rows_single_column() {
        let df = df!("age" => Vec::<f64>::new()).unwrap();
        let summary = StatsReporter::summarize(&df).unwrap();

        assert_eq!(summary.height(), 1);
        assert_eq!(f64_at(&summary, "MissingPct", 0), 0.0);
        assert_eq!(f64_at(&summary, "NUnique", 0), 0.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let df = people_df();
        let first = StatsReporter::summarize(&df).unwrap();
        let second = StatsReporter::summarize(&df).unwrap();

        assert!(first.equals(&second));
    }

    #[test]
    fn test_write_summary_repeatable() {
        let df = people_df();

        let mut first = Vec::new();
        let mut second = Vec::new();
        StatsReporter::write_summary(&df, &mut first).unwrap();
        StatsReporter::write_summary(&df, &mut second).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_does_not_mutate_input() {
        let df = people_df();
        let before = df.clone();

        StatsReporter::profile(&df).unwrap();
        StatsReporter::summarize(&df).unwrap();

        assert!(df.equals_missing(&before));
    }
}
