//! Empirical PDF/CDF over discretised observations.

use std::collections::BTreeMap;

use crate::error::StatsError;

/// Empirical distribution of a discretised sample.
///
/// Holds the sorted unique observed values (`bins`), the probability mass of
/// each value (`pdf`, count over total observations), and the running
/// cumulative distribution (`cdf`). Repeated observations merge into a single
/// mass point. Because every bin carries at least one observation, the CDF is
/// strictly increasing and its final entry is 1 up to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalDistribution {
    bins: Vec<i64>,
    pdf: Vec<f64>,
    cdf: Vec<f64>,
}

impl EmpiricalDistribution {
    /// Builds the distribution of a discretised sample.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] if `values` is empty.
    pub fn new(values: &[i64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        let total = values.len() as f64;
        let bins: Vec<i64> = counts.keys().copied().collect();
        let pdf: Vec<f64> = counts.values().map(|&c| c as f64 / total).collect();

        let mut cdf = Vec::with_capacity(pdf.len());
        let mut running = 0.0;
        for &mass in &pdf {
            running += mass;
            cdf.push(running);
        }

        Ok(Self { bins, pdf, cdf })
    }

    /// Returns the sorted unique observed values.
    pub fn bins(&self) -> &[i64] {
        &self.bins
    }

    /// Returns the probability mass per bin.
    pub fn pdf(&self) -> &[f64] {
        &self.pdf
    }

    /// Returns the cumulative distribution per bin.
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Returns the number of distinct bins.
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// Value at non-exceedance probability `p`, by linear interpolation of
    /// the `(cdf, bin)` pairs.
    ///
    /// Probabilities below the first CDF entry clamp to the smallest bin and
    /// probabilities above the last entry clamp to the largest.
    pub fn quantile(&self, p: f64) -> f64 {
        let last = self.cdf.len() - 1;
        if p <= self.cdf[0] {
            return self.bins[0] as f64;
        }
        if p >= self.cdf[last] {
            return self.bins[last] as f64;
        }
        for i in 0..last {
            let x1 = self.cdf[i + 1];
            if p <= x1 {
                let x0 = self.cdf[i];
                let y0 = self.bins[i] as f64;
                let y1 = self.bins[i + 1] as f64;
                return y0 + (p - x0) * (y1 - y0) / (x1 - x0);
            }
        }
        self.bins[last] as f64
    }
}
