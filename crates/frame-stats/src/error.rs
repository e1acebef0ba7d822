//! Custom error types for summary computation.
//!
//! This module provides the library error hierarchy using `thiserror`.

use thiserror::Error;

/// The main error type for summary computation.
#[derive(Error, Debug)]
pub enum StatsError {
    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    /// Get a stable error code for callers that dispatch on failure class.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }
}

/// Result type alias for summary operations.
pub type Result<T> = std::result::Result<T, StatsError>;
