//! Error types for the ombros-stats crate.

/// Error type for all fallible operations in the ombros-stats crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Returned when a distribution is requested over zero observations.
    #[error("cannot build an empirical distribution from an empty sample")]
    EmptySample,
}
