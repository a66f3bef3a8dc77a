//! Error types for the ombros-idf crate.

use ombros_events::EventError;
use ombros_stats::StatsError;

/// Error type for all fallible operations in the ombros-idf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdfError {
    /// Returned when the segmented record holds no storm events.
    #[error("no storm events: an IDF curve needs at least one segmented event")]
    NoEvents,

    /// Returned when the configuration fails validation.
    #[error("invalid IDF configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the windowed-maximum search fails for one event.
    #[error("windowed maximum failed for event {event_index} at duration {duration_minutes} min: {source}")]
    Window {
        /// 0-based index of the offending event.
        event_index: usize,
        /// Target duration bucket in minutes.
        duration_minutes: u32,
        /// The underlying accumulation failure.
        #[source]
        source: EventError,
    },

    /// Returned when a duration bucket produces no distribution.
    #[error("empty frequency distribution for duration {duration_minutes} min: {source}")]
    Distribution {
        /// Target duration bucket in minutes.
        duration_minutes: u32,
        /// The underlying statistics failure.
        #[source]
        source: StatsError,
    },
}
