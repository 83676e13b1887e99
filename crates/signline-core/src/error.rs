// File: crates/signline-core/src/error.rs
// Summary: Error type shared by the core pipeline.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Rendering needs at least one data point.
    #[error("cannot render a chart with no data points")]
    EmptyDataset,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Text handed to the currency formatter did not parse as a number.
    #[error("cannot format {input:?} as a number")]
    Format { input: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
