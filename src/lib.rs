//! # ombros
//!
//! Intensity-Duration-Frequency (IDF) analysis of observed rainfall records.
//!
//! Given an irregular rainfall time series, `ombros` segments it into storm
//! events with a minimum-interevent-time rule, finds each event's maximum
//! depth over sliding windows for a set of target durations, fits an
//! empirical frequency distribution over the cross-event maxima, and
//! interpolates rainfall intensities for the standard return periods
//! (2, 5, 10, 25, 50 and 100 years).
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────┐   ┌───────────────┐   ┌─────────────────┐   ┌───────────┐
//!  │ RainRecord │──▶│ EventSegmenter│──▶│ per-duration     │──▶│ IdfMatrix │
//!  │ (validated)│   │ (MIT scan)    │   │ maxima + ECDF    │   │           │
//!  └────────────┘   └───────────────┘   └─────────────────┘   └───────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use ombros::{analyze, AnalysisConfig, parse_timestamp, RainRecord, RainRecordKind, RainSample};
//!
//! // One storm: 1 in/hr for a single hourly sample.
//! let base = parse_timestamp("2019-05-01 00:00").unwrap();
//! let samples: Vec<RainSample> = (0..10)
//!     .map(|i| {
//!         let value = if i == 3 { 1.0 } else { 0.0 };
//!         RainSample::new(base + chrono::Duration::hours(i), value)
//!     })
//!     .collect();
//! let record = RainRecord::new(samples, RainRecordKind::Rate).unwrap();
//!
//! let analysis = analyze(&record, &AnalysisConfig::new()).unwrap();
//! assert_eq!(analysis.summaries.len(), 1);
//! assert_eq!(analysis.matrix.n_return_periods(), 6);
//! ```
//!
//! The heavy lifting lives in the workspace crates, re-exported here:
//! [`ombros_timeseries`] (data model), [`ombros_events`] (segmentation),
//! [`ombros_stats`] (empirical distributions) and [`ombros_idf`] (curve
//! construction).

mod analysis;
mod config;
mod error;

pub use analysis::{analyze, IdfAnalysis};
pub use config::AnalysisConfig;
pub use error::AnalysisError;

pub use ombros_events::{
    EventError, EventSegmenter, EventSummary, StormEvent, DEFAULT_MIT_HOURS,
    MINIMUM_DURATION_HOURS,
};
pub use ombros_idf::{
    build_idf, DurationBucket, DurationExtreme, IdfConfig, IdfError, IdfMatrix, IdfOutput,
    DEFAULT_DURATIONS_MINUTES, RETURN_PERIOD_PROBABILITIES,
};
pub use ombros_stats::{EmpiricalDistribution, StatsError};
pub use ombros_timeseries::{
    hours_between, parse_timestamp, RainRecord, RainRecordKind, RainSample, TimeseriesError,
    ACCEPTED_TIMESTAMP_FORMATS,
};
