//! # ombros-idf
//!
//! Intensity-Duration-Frequency analysis over segmented storm events.
//!
//! For every configured target duration the crate finds, per event, the
//! maximum depth over any sub-window of that length, builds the empirical
//! distribution of those maxima across events, and interpolates the depths
//! at the fixed return-period probabilities into an intensity matrix.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐    ┌─────────────────┐    ┌──────────────────┐
//!  │ Vec<StormEvent>│───▶│ DurationBucket  │───▶│  Empirical       │
//!  │  (immutable)   │    │ (windowed maxima)│   │  distribution    │
//!  └────────────────┘    └─────────────────┘    └────────┬─────────┘
//!                              per duration              │ quantiles
//!                                                        ▼
//!                                               ┌──────────────────┐
//!                                               │    IdfMatrix     │
//!                                               └──────────────────┘
//! ```
//!
//! The per-duration stages are mutually independent and run in parallel;
//! results are collected in configuration order, so the output is
//! deterministic.

mod bucket;
mod config;
mod curve;
mod error;
mod frequency;
mod window;

use rayon::prelude::*;
use tracing::debug;

use ombros_events::StormEvent;
use ombros_stats::EmpiricalDistribution;

pub use bucket::DurationBucket;
pub use config::{IdfConfig, DEFAULT_DURATIONS_MINUTES, RETURN_PERIOD_PROBABILITIES};
pub use curve::{DurationExtreme, IdfMatrix};
pub use error::IdfError;
pub use frequency::{bucket_distribution, discretize_depth, DEPTH_DISCRETIZATION};
pub use window::max_depth_for_duration;

/// Result of a full IDF construction.
#[derive(Debug, Clone)]
pub struct IdfOutput {
    /// The intensity grid.
    pub matrix: IdfMatrix,
    /// Observed maximum depth and intensity per target duration.
    pub extremes: Vec<DurationExtreme>,
}

/// Builds the IDF matrix and per-duration extremes for a finalised event
/// list.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IdfError::InvalidConfig`] | empty or zero target durations |
/// | [`IdfError::NoEvents`] | `events` is empty |
/// | [`IdfError::Window`] | a per-event window search fails |
/// | [`IdfError::Distribution`] | a bucket yields no distribution |
#[tracing::instrument(skip(events, config), fields(n_events = events.len(), n_durations = config.durations_minutes().len()))]
pub fn build_idf(events: &[StormEvent], config: &IdfConfig) -> Result<IdfOutput, IdfError> {
    config.validate()?;
    if events.is_empty() {
        return Err(IdfError::NoEvents);
    }

    // Each duration reads the shared event list and fills its own slot;
    // collection preserves configuration order.
    let per_duration: Vec<(DurationBucket, EmpiricalDistribution)> = config
        .durations_minutes()
        .par_iter()
        .map(|&duration_minutes| {
            let bucket = DurationBucket::collect(events, duration_minutes)?;
            let distribution = bucket_distribution(&bucket)?;
            Ok((bucket, distribution))
        })
        .collect::<Result<_, IdfError>>()?;

    let extremes: Vec<DurationExtreme> = per_duration
        .iter()
        .map(|(bucket, _)| DurationExtreme::from_bucket(bucket))
        .collect();
    for extreme in &extremes {
        debug!(
            duration_minutes = extreme.duration_minutes,
            max_depth = extreme.max_depth,
            "duration bucket complete"
        );
    }

    let intensities: Vec<Vec<f64>> = per_duration
        .iter()
        .map(|(bucket, distribution)| curve::intensity_row(bucket.duration_minutes(), distribution))
        .collect();

    let matrix = IdfMatrix::new(
        config.durations_minutes().to_vec(),
        config.return_periods_years(),
        intensities,
    );

    Ok(IdfOutput { matrix, extremes })
}
