//! Error types for the ombros-timeseries crate.

/// Error type for all fallible operations in the ombros-timeseries crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeseriesError {
    /// Returned when a record holds fewer than two samples.
    #[error("record too short: got {n} sample(s), need at least 2")]
    TooShort {
        /// Number of samples provided.
        n: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps must be strictly increasing: violation at sample {index}")]
    NonChronological {
        /// Index of the first sample that is not after its predecessor.
        index: usize,
    },

    /// Returned when a rainfall value is NaN, infinite, or negative.
    #[error("invalid rainfall value {value} at sample {index} (must be finite and >= 0)")]
    InvalidValue {
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when timestamp and value slices differ in length.
    #[error("length mismatch: {timestamps} timestamps vs {values} values")]
    LengthMismatch {
        /// Length of the timestamp slice.
        timestamps: usize,
        /// Length of the value slice.
        values: usize,
    },

    /// Returned when a timestamp string matches none of the accepted formats.
    #[error("could not parse timestamp '{input}' (accepted formats: %Y-%m-%d %H:%M, %m/%d/%Y %H:%M)")]
    TimestampParse {
        /// The unparseable input.
        input: String,
    },
}
