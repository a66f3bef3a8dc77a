//! Empirical frequency analysis of per-duration maxima.

use ombros_stats::EmpiricalDistribution;

use crate::bucket::DurationBucket;
use crate::error::IdfError;

/// Depths are discretised to integer thousandths before binning, so that
/// floating noise cannot split one physical depth across several bins.
pub const DEPTH_DISCRETIZATION: f64 = 1000.0;

/// Discretises a depth to its integer bin (truncating toward zero).
pub fn discretize_depth(depth: f64) -> i64 {
    (DEPTH_DISCRETIZATION * depth) as i64
}

/// Builds the empirical distribution of a bucket's per-event maxima.
///
/// The distribution answers "what fraction of storm events had a maximum at
/// most this deep over this duration". Events landing in the same discretised
/// bin merge into one probability mass point.
///
/// # Errors
///
/// Returns [`IdfError::Distribution`] if the bucket holds no events.
pub fn bucket_distribution(bucket: &DurationBucket) -> Result<EmpiricalDistribution, IdfError> {
    let discretized: Vec<i64> = bucket.maxima().iter().map(|&d| discretize_depth(d)).collect();
    EmpiricalDistribution::new(&discretized).map_err(|source| IdfError::Distribution {
        duration_minutes: bucket.duration_minutes(),
        source,
    })
}
