//! Minimum-interevent-time segmentation scan.

use chrono::Duration;
use ombros_timeseries::{hours_between, RainRecord, RainSample};
use tracing::debug;

use crate::error::EventError;
use crate::event::StormEvent;

/// Default minimum interevent time in hours.
pub const DEFAULT_MIT_HOURS: f64 = 5.0;

/// Partitions a rainfall record into storm events.
///
/// Two rainy periods separated by a dry gap no longer than the minimum
/// interevent time (MIT) belong to the same storm; a longer gap closes the
/// current event and opens a new one. The scan is inherently sequential:
/// every decision depends on the `last_heard` timestamp carried from the
/// previously closed burst.
///
/// # Example
///
/// ```rust
/// use ombros_events::EventSegmenter;
///
/// let segmenter = EventSegmenter::new().with_mit_hours(3.0);
/// assert!(segmenter.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EventSegmenter {
    mit_hours: f64,
}

impl EventSegmenter {
    /// Creates a segmenter with the default MIT of
    /// [`DEFAULT_MIT_HOURS`] hours.
    pub fn new() -> Self {
        Self {
            mit_hours: DEFAULT_MIT_HOURS,
        }
    }

    /// Sets the minimum interevent time in hours.
    pub fn with_mit_hours(mut self, hours: f64) -> Self {
        self.mit_hours = hours;
        self
    }

    /// Returns the minimum interevent time in hours.
    pub fn mit_hours(&self) -> f64 {
        self.mit_hours
    }

    /// Validates this segmenter's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidMit`] if the MIT is not a positive
    /// finite number of hours.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.mit_hours.is_finite() || self.mit_hours <= 0.0 {
            return Err(EventError::InvalidMit {
                value: self.mit_hours,
            });
        }
        Ok(())
    }

    /// Scans the record once and returns the finalised storm events in
    /// chronological order.
    ///
    /// A candidate storm start is a positive sample preceded by a zero
    /// sample. If the gap back to the end of the previous burst is within
    /// the MIT, the run is absorbed into the most recent event (bridged by
    /// the preceding zero sample unless already present); otherwise a new
    /// event starts, seeded with that zero sample. Every absorbed run ends
    /// with one trailing zero terminator, except when the record itself ends
    /// mid-storm.
    ///
    /// A record with no positive samples yields an empty vector; rejecting
    /// that degenerate case is the downstream consumer's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidMit`] for an invalid configuration.
    #[tracing::instrument(skip(self, record), fields(n_samples = record.len(), mit_hours = self.mit_hours))]
    pub fn segment(&self, record: &RainRecord) -> Result<Vec<StormEvent>, EventError> {
        self.validate()?;

        let samples = record.samples();
        let mut pending: Vec<Vec<RainSample>> = Vec::new();

        // Seed last_heard one hour beyond the MIT before the record starts,
        // so the first positive sample always opens a new event.
        let seed_gap = Duration::seconds(((self.mit_hours + 1.0) * 3600.0) as i64);
        let mut last_heard = samples[0].timestamp() - seed_gap;

        let mut i = 1;
        while i < samples.len() {
            if !(samples[i].is_wet() && !samples[i - 1].is_wet()) {
                i += 1;
                continue;
            }

            let gap_hours = hours_between(last_heard, samples[i].timestamp());
            let continues_previous = gap_hours <= self.mit_hours && !pending.is_empty();
            if continues_previous {
                debug!(
                    event = pending.len() - 1,
                    gap_hours,
                    start = %samples[i].timestamp(),
                    "gap within MIT, continuing previous event"
                );
                let event = pending
                    .last_mut()
                    .expect("continuation requires a previous event");
                // Bridge with the preceding zero sample unless the event
                // already ends on it.
                let bridge = samples[i - 1];
                if event.last().map(|s| s.timestamp()) != Some(bridge.timestamp()) {
                    event.push(bridge);
                }
                i = absorb_run(event, samples, i);
                last_heard = event
                    .last()
                    .expect("a continued event holds at least one sample")
                    .timestamp();
            } else {
                debug!(
                    event = pending.len(),
                    gap_hours,
                    start = %samples[i].timestamp(),
                    "starting new storm event"
                );
                let mut event = vec![samples[i - 1]];
                i = absorb_run(&mut event, samples, i);
                last_heard = event
                    .last()
                    .expect("a new event holds at least one sample")
                    .timestamp();
                pending.push(event);
            }
        }

        debug!(n_events = pending.len(), "segmentation scan complete");
        pending
            .into_iter()
            .map(|samples| StormEvent::new(samples, record.kind()))
            .collect()
    }
}

impl Default for EventSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends the positive run starting at `start`, plus the trailing zero
/// terminator when the record still has one, and returns the index where the
/// scan resumes.
fn absorb_run(event: &mut Vec<RainSample>, samples: &[RainSample], start: usize) -> usize {
    let mut j = start;
    while j < samples.len() && samples[j].is_wet() {
        event.push(samples[j]);
        j += 1;
    }
    if j < samples.len() {
        event.push(samples[j]);
        j += 1;
    }
    j
}
