//! IDF matrix assembly and per-duration extremes.

use ombros_stats::EmpiricalDistribution;

use crate::bucket::DurationBucket;
use crate::config::RETURN_PERIOD_PROBABILITIES;
use crate::frequency::DEPTH_DISCRETIZATION;

/// The final intensity grid: one row per target duration, one column per
/// return period, in configuration/table order. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfMatrix {
    durations_minutes: Vec<u32>,
    return_periods_years: Vec<u32>,
    intensities: Vec<Vec<f64>>,
}

impl IdfMatrix {
    pub(crate) fn new(
        durations_minutes: Vec<u32>,
        return_periods_years: Vec<u32>,
        intensities: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            durations_minutes,
            return_periods_years,
            intensities,
        }
    }

    /// Returns the row durations in minutes.
    pub fn durations_minutes(&self) -> &[u32] {
        &self.durations_minutes
    }

    /// Returns the column return periods in years.
    pub fn return_periods_years(&self) -> &[u32] {
        &self.return_periods_years
    }

    /// Returns the number of duration rows.
    pub fn n_durations(&self) -> usize {
        self.durations_minutes.len()
    }

    /// Returns the number of return-period columns.
    pub fn n_return_periods(&self) -> usize {
        self.return_periods_years.len()
    }

    /// Intensity (depth per hour) for the duration row `duration_index` and
    /// return-period column `period_index`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn intensity(&self, duration_index: usize, period_index: usize) -> f64 {
        self.intensities[duration_index][period_index]
    }

    /// Returns one duration's intensities across all return periods.
    ///
    /// # Panics
    ///
    /// Panics if `duration_index` is out of bounds.
    pub fn row(&self, duration_index: usize) -> &[f64] {
        &self.intensities[duration_index]
    }
}

/// The largest windowed depth observed for one target duration, with its
/// equivalent intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationExtreme {
    /// Target duration in minutes.
    pub duration_minutes: u32,
    /// Maximum windowed depth across all events.
    pub max_depth: f64,
    /// The maximum expressed as an intensity (depth per hour).
    pub intensity: f64,
}

impl DurationExtreme {
    /// Summarises one bucket's observed maximum.
    pub fn from_bucket(bucket: &DurationBucket) -> Self {
        let max_depth = bucket.max_observed();
        let duration_hours = bucket.duration_minutes() as f64 / 60.0;
        Self {
            duration_minutes: bucket.duration_minutes(),
            max_depth,
            intensity: max_depth / duration_hours,
        }
    }
}

/// Interpolated intensities for one duration across all return periods.
///
/// Quantiles come back in discretised depth units; each is rescaled to depth
/// and divided by the duration in hours.
pub(crate) fn intensity_row(duration_minutes: u32, dist: &EmpiricalDistribution) -> Vec<f64> {
    let duration_hours = duration_minutes as f64 / 60.0;
    RETURN_PERIOD_PROBABILITIES
        .iter()
        .map(|&(_, p)| dist.quantile(p) / DEPTH_DISCRETIZATION / duration_hours)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matrix_accessors() {
        let matrix = IdfMatrix::new(
            vec![60, 120],
            vec![2, 5],
            vec![vec![1.0, 2.0], vec![0.5, 0.8]],
        );
        assert_eq!(matrix.n_durations(), 2);
        assert_eq!(matrix.n_return_periods(), 2);
        assert_eq!(matrix.durations_minutes(), &[60, 120]);
        assert_eq!(matrix.return_periods_years(), &[2, 5]);
        assert_relative_eq!(matrix.intensity(1, 0), 0.5, epsilon = 1e-12);
        assert_eq!(matrix.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn intensity_row_rescales_and_divides_by_duration() {
        // Bins 500 and 1500 (depths 0.5 and 1.5), each from one event:
        // CDF = [0.5, 1.0].
        let dist = EmpiricalDistribution::new(&[500, 1500]).unwrap();
        let row = intensity_row(60, &dist);
        assert_eq!(row.len(), 6);
        // p = 0.50 clamps to the first bin: 500/1000/1 = 0.5 depth/hr.
        assert_relative_eq!(row[0], 0.5, epsilon = 1e-12);
        // p = 0.80 interpolates: 500 + 0.3/0.5 * 1000 = 1100 -> 1.1 depth/hr.
        assert_relative_eq!(row[1], 1.1, epsilon = 1e-12);
        // p = 0.99: 500 + 0.49/0.5 * 1000 = 1480 -> 1.48 depth/hr.
        assert_relative_eq!(row[5], 1.48, epsilon = 1e-12);
    }

    #[test]
    fn intensity_row_divides_by_duration_hours() {
        let dist = EmpiricalDistribution::new(&[600]).unwrap();
        // Single bin: every quantile is 600 -> 0.6 depth over 0.5 h = 1.2.
        let row = intensity_row(30, &dist);
        for &intensity in &row {
            assert_relative_eq!(intensity, 1.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn extreme_from_bucket() {
        use ombros_events::StormEvent;
        use ombros_timeseries::{parse_timestamp, RainRecordKind, RainSample};

        let base = parse_timestamp("2019-05-01 00:00").unwrap();
        let samples: Vec<RainSample> = [0.0, 3.0, 0.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| RainSample::new(base + chrono::Duration::hours(i as i64), v))
            .collect();
        let event = StormEvent::new(samples, RainRecordKind::CumulativeDepth).unwrap();
        let bucket = DurationBucket::collect(std::slice::from_ref(&event), 120).unwrap();

        let extreme = DurationExtreme::from_bucket(&bucket);
        assert_eq!(extreme.duration_minutes, 120);
        assert_relative_eq!(extreme.max_depth, 3.0, epsilon = 1e-12);
        assert_relative_eq!(extreme.intensity, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn matrix_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IdfMatrix>();
        assert_impl::<DurationExtreme>();
    }
}
