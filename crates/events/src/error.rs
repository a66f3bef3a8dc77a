//! Error types for the ombros-events crate.

/// Error type for all fallible operations in the ombros-events crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventError {
    /// Returned when a storm event is constructed with no samples.
    #[error("a storm event requires at least one sample")]
    EmptyEvent,

    /// Returned when an accumulation range starts after it ends.
    #[error("invalid accumulation range: start {start} is after end {end}")]
    RangeOrder {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
    },

    /// Returned when an accumulation range runs past the event's samples.
    #[error("accumulation end {end} out of bounds for event with {point_count} sample(s)")]
    RangeOutOfBounds {
        /// Requested end index.
        end: usize,
        /// Number of samples in the event.
        point_count: usize,
    },

    /// Returned when the minimum interevent time is not a positive finite
    /// number of hours.
    #[error("invalid minimum interevent time: {value} (must be finite and > 0)")]
    InvalidMit {
        /// The offending MIT value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_event() {
        let e = EventError::EmptyEvent;
        assert_eq!(e.to_string(), "a storm event requires at least one sample");
    }

    #[test]
    fn error_range_order() {
        let e = EventError::RangeOrder { start: 5, end: 2 };
        assert_eq!(
            e.to_string(),
            "invalid accumulation range: start 5 is after end 2"
        );
    }

    #[test]
    fn error_range_out_of_bounds() {
        let e = EventError::RangeOutOfBounds {
            end: 9,
            point_count: 6,
        };
        assert_eq!(
            e.to_string(),
            "accumulation end 9 out of bounds for event with 6 sample(s)"
        );
    }

    #[test]
    fn error_invalid_mit() {
        let e = EventError::InvalidMit { value: -1.0 };
        assert_eq!(
            e.to_string(),
            "invalid minimum interevent time: -1 (must be finite and > 0)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EventError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EventError>();
    }
}
