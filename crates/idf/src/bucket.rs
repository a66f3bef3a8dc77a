//! Cross-event maxima for one target duration.

use ombros_events::StormEvent;

use crate::error::IdfError;
use crate::window::max_depth_for_duration;

/// The windowed depth maxima of every storm event for one target duration.
///
/// One entry per event, in event order; zeros are permitted (an event can be
/// dry at a given window length, e.g. when its sample spacing exceeds it).
#[derive(Debug, Clone, PartialEq)]
pub struct DurationBucket {
    duration_minutes: u32,
    maxima: Vec<f64>,
}

impl DurationBucket {
    /// Computes the maxima of all `events` for `duration_minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::Window`] with the offending event index if any
    /// per-event search fails.
    pub fn collect(events: &[StormEvent], duration_minutes: u32) -> Result<Self, IdfError> {
        let mut maxima = Vec::with_capacity(events.len());
        for (event_index, event) in events.iter().enumerate() {
            let max = max_depth_for_duration(event, duration_minutes).map_err(|source| {
                IdfError::Window {
                    event_index,
                    duration_minutes,
                    source,
                }
            })?;
            maxima.push(max);
        }
        Ok(Self {
            duration_minutes,
            maxima,
        })
    }

    /// Returns the target duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the per-event maxima, in event order.
    pub fn maxima(&self) -> &[f64] {
        &self.maxima
    }

    /// Returns the number of contributing events.
    pub fn n_events(&self) -> usize {
        self.maxima.len()
    }

    /// Returns the largest maximum across all events (0 if none are wet).
    pub fn max_observed(&self) -> f64 {
        self.maxima.iter().fold(0.0, |best, &v| f64::max(best, v))
    }
}
