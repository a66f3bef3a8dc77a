//! # ombros-timeseries
//!
//! Data model for observed rainfall records.
//!
//! A [`RainRecord`] is an ordered sequence of timestamped samples tagged with
//! a [`RainRecordKind`] that fixes the meaning of each value: an instantaneous
//! rate (depth per hour) or the depth accumulated since the previous sample.
//! Construction validates the record once, so every downstream stage can rely
//! on strictly increasing timestamps and finite, non-negative values.
//!
//! # Quick start
//!
//! ```rust
//! use ombros_timeseries::{parse_timestamp, RainRecord, RainRecordKind, RainSample};
//!
//! let samples = vec![
//!     RainSample::new(parse_timestamp("2019-05-01 00:00").unwrap(), 0.0),
//!     RainSample::new(parse_timestamp("2019-05-01 01:00").unwrap(), 0.4),
//!     RainSample::new(parse_timestamp("2019-05-01 02:00").unwrap(), 0.0),
//! ];
//! let record = RainRecord::new(samples, RainRecordKind::CumulativeDepth).unwrap();
//! assert_eq!(record.len(), 3);
//! ```

mod error;
mod parse;
mod record;
mod sample;

pub use error::TimeseriesError;
pub use parse::{parse_timestamp, ACCEPTED_TIMESTAMP_FORMATS};
pub use record::{hours_between, RainRecord};
pub use sample::{RainRecordKind, RainSample};
