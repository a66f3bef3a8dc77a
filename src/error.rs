//! Top-level error type composing the workspace crate errors.

use ombros_events::EventError;
use ombros_idf::IdfError;
use ombros_stats::StatsError;
use ombros_timeseries::TimeseriesError;

/// Error type for a full analysis run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    /// Record construction or parsing failed.
    #[error("rainfall record error: {0}")]
    Timeseries(#[from] TimeseriesError),

    /// Event segmentation failed.
    #[error("event segmentation error: {0}")]
    Event(#[from] EventError),

    /// Distribution construction failed.
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    /// IDF curve construction failed.
    #[error("IDF construction error: {0}")]
    Idf(#[from] IdfError),
}
