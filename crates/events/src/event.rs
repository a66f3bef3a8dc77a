//! A single storm event and its derived statistics.

use std::fmt;

use chrono::NaiveDateTime;
use ombros_timeseries::{hours_between, RainRecordKind, RainSample};

use crate::error::EventError;

/// Duration assigned to an event with exactly one positive sample, in hours
/// (5 minutes). The true onset and cessation fall somewhere between adjacent
/// samples, so a single spike cannot be shorter than this floor.
pub const MINIMUM_DURATION_HOURS: f64 = 5.0 / 60.0;

/// One storm event: a contiguous slice of the source record bounded by a
/// leading zero sample and, unless the record ended mid-storm, a trailing
/// zero sample.
///
/// Duration and total depth are computed once when the event is finalised.
#[derive(Debug, Clone)]
pub struct StormEvent {
    samples: Vec<RainSample>,
    kind: RainRecordKind,
    duration_hours: f64,
    total_depth: f64,
}

impl StormEvent {
    /// Finalises a storm event from its owned samples.
    ///
    /// Computes the event duration (anchored to the first and last positive
    /// samples; see [`MINIMUM_DURATION_HOURS`]) and the total depth over the
    /// full sample range.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyEvent`] if `samples` is empty.
    pub fn new(samples: Vec<RainSample>, kind: RainRecordKind) -> Result<Self, EventError> {
        if samples.is_empty() {
            return Err(EventError::EmptyEvent);
        }
        let duration_hours = duration_hours_of(&samples);
        let total_depth = accumulate(&samples, kind, 0, samples.len() - 1)?;
        Ok(Self {
            samples,
            kind,
            duration_hours,
            total_depth,
        })
    }

    /// Returns the event's samples in chronological order.
    pub fn samples(&self) -> &[RainSample] {
        &self.samples
    }

    /// Returns the record kind the samples were observed under.
    pub fn kind(&self) -> RainRecordKind {
        self.kind
    }

    /// Returns the number of samples in the event.
    pub fn point_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns the event duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Returns the total depth accumulated over the whole event.
    pub fn total_depth(&self) -> f64 {
        self.total_depth
    }

    /// Returns the timestamp of the first sample.
    pub fn start_time(&self) -> NaiveDateTime {
        self.samples[0].timestamp()
    }

    /// Returns the timestamp of the last sample.
    pub fn end_time(&self) -> NaiveDateTime {
        self.samples[self.samples.len() - 1].timestamp()
    }

    /// Depth accumulated over the half-open index range `[start, end)`.
    ///
    /// The sample at `end` bounds the range but does not contribute to it:
    /// for `CumulativeDepth` records the values `start..end` are summed, and
    /// for `Rate` records the trapezoids over the intervals
    /// `[start, start+1] .. [end-1, end]` are summed, both left to right.
    /// `start == end` yields 0. The windowed-maximum search depends on this
    /// exact boundary; treat the convention as part of the contract rather
    /// than an off-by-one.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`EventError::RangeOrder`] | `start > end` |
    /// | [`EventError::RangeOutOfBounds`] | `end > point_count - 1` |
    pub fn depth_between(&self, start: usize, end: usize) -> Result<f64, EventError> {
        accumulate(&self.samples, self.kind, start, end)
    }

    /// Returns the diagnostic summary for this event.
    pub fn summary(&self, index: usize) -> EventSummary {
        EventSummary {
            index,
            start: self.start_time(),
            end: self.end_time(),
            duration_hours: self.duration_hours,
            total_depth: self.total_depth,
            point_count: self.samples.len(),
        }
    }
}

/// Per-event diagnostic record for logging and external reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    /// Position of the event in the segmented record (0-based).
    pub index: usize,
    /// Timestamp of the event's first sample.
    pub start: NaiveDateTime,
    /// Timestamp of the event's last sample.
    pub end: NaiveDateTime,
    /// Event duration in hours.
    pub duration_hours: f64,
    /// Total depth over the whole event.
    pub total_depth: f64,
    /// Number of samples in the event.
    pub point_count: usize,
}

impl fmt::Display for EventSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {} -- {}  ({:6.2} hours); {:6.2} depth",
            self.index, self.start, self.end, self.duration_hours, self.total_depth
        )
    }
}

/// Event duration in hours, anchored to the bracketing positive samples.
///
/// No positive sample yields 0; a single positive sample yields
/// [`MINIMUM_DURATION_HOURS`]; otherwise the elapsed hours between the first
/// and last positive samples.
fn duration_hours_of(samples: &[RainSample]) -> f64 {
    let first = samples.iter().position(|s| s.is_wet());
    let last = samples.iter().rposition(|s| s.is_wet());
    match (first, last) {
        (Some(first), Some(last)) if first != last => {
            hours_between(samples[first].timestamp(), samples[last].timestamp())
        }
        (Some(_), Some(_)) => MINIMUM_DURATION_HOURS,
        _ => 0.0,
    }
}

/// Shared accumulation kernel for `new` and `depth_between`.
fn accumulate(
    samples: &[RainSample],
    kind: RainRecordKind,
    start: usize,
    end: usize,
) -> Result<f64, EventError> {
    if start > end {
        return Err(EventError::RangeOrder { start, end });
    }
    if end > samples.len() - 1 {
        return Err(EventError::RangeOutOfBounds {
            end,
            point_count: samples.len(),
        });
    }
    if start == end {
        return Ok(0.0);
    }

    let mut depth = 0.0;
    match kind {
        RainRecordKind::Rate => {
            // Trapezoidal rule on the non-uniform time grid.
            for k in start..end {
                let delta_t =
                    hours_between(samples[k].timestamp(), samples[k + 1].timestamp());
                depth += 0.5 * (samples[k].value() + samples[k + 1].value()) * delta_t;
            }
        }
        RainRecordKind::CumulativeDepth => {
            for sample in &samples[start..end] {
                depth += sample.value();
            }
        }
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ombros_timeseries::parse_timestamp;

    fn hourly_event(values: &[f64], kind: RainRecordKind) -> StormEvent {
        let samples: Vec<RainSample> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let t = parse_timestamp("2019-05-01 00:00").unwrap()
                    + chrono::Duration::hours(i as i64);
                RainSample::new(t, v)
            })
            .collect();
        StormEvent::new(samples, kind).unwrap()
    }

    #[test]
    fn empty_event_errors() {
        assert!(matches!(
            StormEvent::new(Vec::new(), RainRecordKind::Rate),
            Err(EventError::EmptyEvent)
        ));
    }

    #[test]
    fn single_spike_gets_minimum_duration() {
        let event = hourly_event(&[0.0, 2.0, 0.0], RainRecordKind::Rate);
        assert_relative_eq!(event.duration_hours(), MINIMUM_DURATION_HOURS, epsilon = 1e-12);
    }

    #[test]
    fn single_spike_minimum_duration_ignores_spacing() {
        // Same shape on a 15-minute grid: still exactly 5 minutes.
        let base = parse_timestamp("2019-05-01 00:00").unwrap();
        let samples: Vec<RainSample> = [0.0, 2.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| RainSample::new(base + chrono::Duration::minutes(15 * i as i64), v))
            .collect();
        let event = StormEvent::new(samples, RainRecordKind::Rate).unwrap();
        assert_relative_eq!(event.duration_hours(), 5.0 / 60.0, epsilon = 1e-12);
    }

    #[test]
    fn duration_spans_bracketing_positives() {
        let event = hourly_event(&[0.0, 1.0, 0.5, 2.0, 0.0], RainRecordKind::Rate);
        // First positive at hour 1, last at hour 3.
        assert_relative_eq!(event.duration_hours(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn all_zero_event_has_zero_duration() {
        let event = hourly_event(&[0.0, 0.0, 0.0], RainRecordKind::Rate);
        assert_relative_eq!(event.duration_hours(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(event.total_depth(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn depth_between_same_index_is_zero() {
        let event = hourly_event(&[0.0, 1.0, 2.0, 0.0], RainRecordKind::Rate);
        for m in 0..event.point_count() {
            assert_relative_eq!(event.depth_between(m, m).unwrap(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn depth_between_rejects_reversed_range() {
        let event = hourly_event(&[0.0, 1.0, 0.0], RainRecordKind::Rate);
        assert!(matches!(
            event.depth_between(2, 1),
            Err(EventError::RangeOrder { start: 2, end: 1 })
        ));
    }

    #[test]
    fn depth_between_rejects_out_of_bounds() {
        let event = hourly_event(&[0.0, 1.0, 0.0], RainRecordKind::Rate);
        assert!(matches!(
            event.depth_between(0, 3),
            Err(EventError::RangeOutOfBounds {
                end: 3,
                point_count: 3
            })
        ));
    }

    #[test]
    fn trapezoid_constant_rate() {
        // Constant rate r over n uniformly spaced samples: depth = r*(n-1)*dt.
        let event = hourly_event(&[2.0, 2.0, 2.0, 2.0, 2.0], RainRecordKind::Rate);
        let depth = event.depth_between(0, 4).unwrap();
        assert_relative_eq!(depth, 2.0 * 4.0 * 1.0, epsilon = 1e-9);
    }

    #[test]
    fn trapezoid_single_spike() {
        // [0, 1, 0] hourly at rate 1 in/hr: two trapezoids of 0.5 each.
        let event = hourly_event(&[0.0, 1.0, 0.0], RainRecordKind::Rate);
        assert_relative_eq!(event.total_depth(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cumulative_sum_excludes_end_sample() {
        let event = hourly_event(&[0.0, 0.3, 0.7, 0.0], RainRecordKind::CumulativeDepth);
        // Half-open [1, 2): only the 0.3 sample.
        assert_relative_eq!(event.depth_between(1, 2).unwrap(), 0.3, epsilon = 1e-12);
        // Full range [0, 3): the end sample never contributes.
        assert_relative_eq!(event.total_depth(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn summary_fields() {
        let event = hourly_event(&[0.0, 1.0, 0.0], RainRecordKind::Rate);
        let summary = event.summary(3);
        assert_eq!(summary.index, 3);
        assert_eq!(summary.point_count, 3);
        assert_eq!(summary.start, event.start_time());
        assert_eq!(summary.end, event.end_time());
        assert_relative_eq!(summary.total_depth, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn summary_display() {
        let event = hourly_event(&[0.0, 1.0, 0.0], RainRecordKind::Rate);
        let line = event.summary(0).to_string();
        assert!(line.starts_with("00 2019-05-01 00:00:00"));
        assert!(line.contains("hours"));
    }

    #[test]
    fn event_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StormEvent>();
        assert_impl::<EventSummary>();
    }
}
