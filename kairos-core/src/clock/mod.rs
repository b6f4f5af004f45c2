//! Wall-clock handling
//!
//! - `snapshot`: fields captured at a tick and the texts/colour derived from them
//! - `driver`: per-tick region updates and weather refresh cadence

pub mod driver;
pub mod snapshot;

pub use driver::ClockDriver;
pub use snapshot::{ClockSnapshot, MinuteKey, TimewarpColor};
