//! Top-level analysis configuration.

use ombros_events::{EventSegmenter, DEFAULT_MIT_HOURS};
use ombros_idf::IdfConfig;

use crate::error::AnalysisError;

/// Configuration for a full IDF analysis run.
///
/// Composes the segmentation and curve-construction settings; the crate
/// configs are built from it on demand.
///
/// # Example
///
/// ```rust
/// use ombros::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_mit_hours(3.0)
///     .with_durations_minutes(vec![15, 60, 1440]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    mit_hours: f64,
    idf: IdfConfig,
}

impl AnalysisConfig {
    /// Creates a configuration with the default MIT (5 hours) and target
    /// durations.
    pub fn new() -> Self {
        Self {
            mit_hours: DEFAULT_MIT_HOURS,
            idf: IdfConfig::new(),
        }
    }

    /// Sets the minimum interevent time in hours.
    pub fn with_mit_hours(mut self, hours: f64) -> Self {
        self.mit_hours = hours;
        self
    }

    /// Sets the target durations in minutes.
    pub fn with_durations_minutes(mut self, durations: Vec<u32>) -> Self {
        self.idf = self.idf.with_durations_minutes(durations);
        self
    }

    /// Returns the minimum interevent time in hours.
    pub fn mit_hours(&self) -> f64 {
        self.mit_hours
    }

    /// Returns the target durations in minutes.
    pub fn durations_minutes(&self) -> &[u32] {
        self.idf.durations_minutes()
    }

    /// Builds the segmenter for this configuration.
    pub fn segmenter(&self) -> EventSegmenter {
        EventSegmenter::new().with_mit_hours(self.mit_hours)
    }

    /// Builds the IDF configuration for this configuration.
    pub fn idf_config(&self) -> IdfConfig {
        self.idf.clone()
    }

    /// Validates both the segmentation and curve settings.
    ///
    /// # Errors
    ///
    /// Propagates the first failing crate validation.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.segmenter().validate()?;
        self.idf.validate()?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
