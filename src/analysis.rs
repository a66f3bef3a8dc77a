//! Full analysis pipeline: record to IDF matrix.

use tracing::info;

use ombros_events::EventSummary;
use ombros_idf::{build_idf, DurationExtreme, IdfMatrix};
use ombros_timeseries::RainRecord;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Result of a full analysis run.
#[derive(Debug, Clone)]
pub struct IdfAnalysis {
    /// Diagnostic summary of every segmented storm event, in order.
    pub summaries: Vec<EventSummary>,
    /// Observed maximum depth and intensity per target duration.
    pub extremes: Vec<DurationExtreme>,
    /// The final intensity grid.
    pub matrix: IdfMatrix,
}

/// Runs the full IDF analysis over a validated rainfall record.
///
/// Segments the record into storm events, logs a summary per event, then
/// builds the per-duration maxima, their empirical distributions and the
/// final intensity matrix.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`AnalysisError::Event`] | invalid segmenter configuration |
/// | [`AnalysisError::Idf`] | invalid IDF configuration, a record with no storm events, or a failed per-duration computation |
#[tracing::instrument(skip(record, config), fields(n_samples = record.len()))]
pub fn analyze(record: &RainRecord, config: &AnalysisConfig) -> Result<IdfAnalysis, AnalysisError> {
    config.validate()?;

    let events = config.segmenter().segment(record)?;
    info!(n_events = events.len(), "segmentation complete");

    let summaries: Vec<EventSummary> = events
        .iter()
        .enumerate()
        .map(|(index, event)| event.summary(index))
        .collect();
    for summary in &summaries {
        info!(
            event = summary.index,
            start = %summary.start,
            end = %summary.end,
            duration_hours = summary.duration_hours,
            total_depth = summary.total_depth,
            "storm event"
        );
    }

    let output = build_idf(&events, &config.idf_config())?;
    info!(
        n_durations = output.matrix.n_durations(),
        n_return_periods = output.matrix.n_return_periods(),
        "IDF matrix assembled"
    );

    Ok(IdfAnalysis {
        summaries,
        extremes: output.extremes,
        matrix: output.matrix,
    })
}
