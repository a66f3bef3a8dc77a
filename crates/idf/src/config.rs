//! Configuration for IDF curve construction.

use crate::error::IdfError;

/// Default target durations in minutes.
pub const DEFAULT_DURATIONS_MINUTES: [u32; 8] = [5, 15, 30, 60, 120, 180, 720, 1440];

/// Return periods (years) paired with their non-exceedance probabilities.
///
/// The probabilities are a fixed calibrated table, not the literal
/// `1 - 1/T` formula; they encode the chosen smoothing of exceedance
/// probability against return period and must not be recomputed.
pub const RETURN_PERIOD_PROBABILITIES: [(u32, f64); 6] = [
    (2, 0.50),
    (5, 0.80),
    (10, 0.90),
    (25, 0.96),
    (50, 0.98),
    (100, 0.99),
];

/// Configuration for IDF curve construction.
///
/// # Example
///
/// ```rust
/// use ombros_idf::IdfConfig;
///
/// let config = IdfConfig::new().with_durations_minutes(vec![15, 60, 1440]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct IdfConfig {
    durations_minutes: Vec<u32>,
}

impl IdfConfig {
    /// Creates a configuration with the default target durations.
    pub fn new() -> Self {
        Self {
            durations_minutes: DEFAULT_DURATIONS_MINUTES.to_vec(),
        }
    }

    /// Sets the target durations in minutes.
    pub fn with_durations_minutes(mut self, durations: Vec<u32>) -> Self {
        self.durations_minutes = durations;
        self
    }

    /// Returns the target durations in minutes.
    pub fn durations_minutes(&self) -> &[u32] {
        &self.durations_minutes
    }

    /// Returns the return periods in years, in table order.
    pub fn return_periods_years(&self) -> Vec<u32> {
        RETURN_PERIOD_PROBABILITIES.iter().map(|&(t, _)| t).collect()
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::InvalidConfig`] if no durations are configured or
    /// any duration is zero.
    pub fn validate(&self) -> Result<(), IdfError> {
        if self.durations_minutes.is_empty() {
            return Err(IdfError::InvalidConfig {
                reason: "at least one target duration is required".to_string(),
            });
        }
        if let Some(&zero) = self.durations_minutes.iter().find(|&&d| d == 0) {
            return Err(IdfError::InvalidConfig {
                reason: format!("target duration must be positive, got {zero}"),
            });
        }
        Ok(())
    }
}

impl Default for IdfConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = IdfConfig::new();
        assert_eq!(config.durations_minutes(), &[5, 15, 30, 60, 120, 180, 720, 1440]);
        assert_eq!(config.return_periods_years(), vec![2, 5, 10, 25, 50, 100]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn probability_table_is_fixed() {
        // The calibrated table, not 1 - 1/T: the 2-year entry would otherwise
        // be 0.5 by coincidence only.
        assert_relative_eq!(RETURN_PERIOD_PROBABILITIES[1].1, 0.80, epsilon = 1e-12);
        assert_relative_eq!(RETURN_PERIOD_PROBABILITIES[3].1, 0.96, epsilon = 1e-12);
        assert_relative_eq!(RETURN_PERIOD_PROBABILITIES[5].1, 0.99, epsilon = 1e-12);
    }

    #[test]
    fn builder() {
        let config = IdfConfig::new().with_durations_minutes(vec![60, 120]);
        assert_eq!(config.durations_minutes(), &[60, 120]);
    }

    #[test]
    fn validate_empty_durations() {
        let config = IdfConfig::new().with_durations_minutes(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(IdfError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_zero_duration() {
        let config = IdfConfig::new().with_durations_minutes(vec![60, 0]);
        assert!(matches!(
            config.validate(),
            Err(IdfError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn config_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IdfConfig>();
    }
}
