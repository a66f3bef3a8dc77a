//! # ombros-stats
//!
//! Empirical frequency distributions over discretised observations.
//!
//! The single exported type, [`EmpiricalDistribution`], is built from integer
//! observations and answers quantile queries by piecewise-linear
//! interpolation into its CDF. No parametric family is assumed anywhere.

mod distribution;
mod error;

pub use distribution::EmpiricalDistribution;
pub use error::StatsError;
