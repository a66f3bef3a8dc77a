//! # ombros-events
//!
//! Storm-event segmentation and per-event depth accumulation.
//!
//! A continuous rainfall record is partitioned into discrete storm events by
//! the minimum-interevent-time (MIT) rule: a dry gap longer than the MIT
//! separates two events, a shorter gap merges the rainfall on either side
//! into one. Each [`StormEvent`] owns its contiguous slice of the source
//! record, bounded by one zero sample before the first positive value and one
//! after the last, and carries its finalised duration and total depth.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//!  │  RainRecord  │────▶│  EventSegmenter   │────▶│  Vec<StormEvent> │
//!  │  (validated) │     │  (MIT scan)       │     │  (finalised)     │
//!  └──────────────┘     └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use ombros_events::EventSegmenter;
//!
//! let segmenter = EventSegmenter::new().with_mit_hours(5.0);
//! let events = segmenter.segment(&record)?;
//! for (i, event) in events.iter().enumerate() {
//!     println!("{}", event.summary(i));
//! }
//! ```

mod error;
mod event;
mod segmenter;

pub use error::EventError;
pub use event::{EventSummary, StormEvent, MINIMUM_DURATION_HOURS};
pub use segmenter::{EventSegmenter, DEFAULT_MIT_HOURS};
