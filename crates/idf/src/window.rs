//! Maximum depth over any sub-window of a target duration.

use ombros_events::{EventError, StormEvent};
use ombros_timeseries::hours_between;

/// Maximum depth accumulated within any contiguous sub-window of `event`
/// whose elapsed time stays within `duration_minutes`.
///
/// An event no longer than the target duration contributes its whole total
/// without a search (this also covers events too short to window at all).
/// Otherwise every start index is tried with a carried-forward end pointer:
/// the first index whose elapsed time from the start exceeds the target is
/// non-decreasing in the start index, so the pointer never moves backwards
/// and the scan stays linear. The window end handed to
/// [`StormEvent::depth_between`] is
///
/// - the last sample index when the event tail arrives before the elapsed
///   time exceeds the target,
/// - the start index itself when already the first interval exceeds the
///   target (an empty window, depth 0),
/// - otherwise that first exceeding index, which the half-open accumulation
///   range then excludes.
///
/// # Errors
///
/// Propagates [`EventError`] from the per-window accumulation.
pub fn max_depth_for_duration(
    event: &StormEvent,
    duration_minutes: u32,
) -> Result<f64, EventError> {
    let target_hours = duration_minutes as f64 / 60.0;
    if event.duration_hours() <= target_hours {
        return Ok(event.total_depth());
    }

    let samples = event.samples();
    let n = event.point_count();
    let mut best = 0.0_f64;
    let mut overshoot = 1;

    for a in 0..n.saturating_sub(2) {
        if overshoot <= a {
            overshoot = a + 1;
        }
        while overshoot <= n - 1
            && hours_between(samples[a].timestamp(), samples[overshoot].timestamp())
                <= target_hours
        {
            overshoot += 1;
        }

        let end = if overshoot > n - 1 {
            n - 1
        } else if overshoot == a + 1 {
            a
        } else {
            overshoot
        };

        let depth = event.depth_between(a, end)?;
        if depth > best {
            best = depth;
        }
    }

    Ok(best)
}
