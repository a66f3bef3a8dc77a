//! Validated rainfall record.

use chrono::NaiveDateTime;

use crate::error::TimeseriesError;
use crate::sample::{RainRecordKind, RainSample};

/// Hours elapsed from `earlier` to `later`.
///
/// Negative if `later` precedes `earlier`; callers working on a validated
/// [`RainRecord`] only ever see non-negative results.
pub fn hours_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_seconds() as f64 / 3600.0
}

/// An ordered rainfall record: strictly increasing timestamps, finite
/// non-negative values, and a fixed [`RainRecordKind`].
///
/// Validation happens once at construction so downstream stages never
/// re-check the invariants.
#[derive(Debug, Clone)]
pub struct RainRecord {
    samples: Vec<RainSample>,
    kind: RainRecordKind,
}

impl RainRecord {
    /// Creates a record from owned samples.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`TimeseriesError::TooShort`] | fewer than 2 samples |
    /// | [`TimeseriesError::NonChronological`] | a timestamp not after its predecessor |
    /// | [`TimeseriesError::InvalidValue`] | a NaN, infinite, or negative value |
    pub fn new(samples: Vec<RainSample>, kind: RainRecordKind) -> Result<Self, TimeseriesError> {
        if samples.len() < 2 {
            return Err(TimeseriesError::TooShort { n: samples.len() });
        }
        for (index, sample) in samples.iter().enumerate() {
            if !sample.value().is_finite() || sample.value() < 0.0 {
                return Err(TimeseriesError::InvalidValue {
                    index,
                    value: sample.value(),
                });
            }
            if index > 0 && sample.timestamp() <= samples[index - 1].timestamp() {
                return Err(TimeseriesError::NonChronological { index });
            }
        }
        Ok(Self { samples, kind })
    }

    /// Creates a record from parallel timestamp and value slices.
    ///
    /// # Errors
    ///
    /// Returns [`TimeseriesError::LengthMismatch`] when the slices differ in
    /// length, otherwise validates as [`RainRecord::new`].
    pub fn from_pairs(
        timestamps: &[NaiveDateTime],
        values: &[f64],
        kind: RainRecordKind,
    ) -> Result<Self, TimeseriesError> {
        if timestamps.len() != values.len() {
            return Err(TimeseriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        let samples = timestamps
            .iter()
            .zip(values.iter())
            .map(|(&t, &v)| RainSample::new(t, v))
            .collect();
        Self::new(samples, kind)
    }

    /// Returns the samples in chronological order.
    pub fn samples(&self) -> &[RainSample] {
        &self.samples
    }

    /// Returns the record kind.
    pub fn kind(&self) -> RainRecordKind {
        self.kind
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: construction requires at least two samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the first timestamp.
    pub fn start_time(&self) -> NaiveDateTime {
        self.samples[0].timestamp()
    }

    /// Returns the last timestamp.
    pub fn end_time(&self) -> NaiveDateTime {
        self.samples[self.samples.len() - 1].timestamp()
    }
}
