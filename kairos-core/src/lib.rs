//! Board-agnostic core logic for the Kairos watchface
//!
//! This crate contains all watchface logic that does not depend on a
//! specific host platform:
//!
//! - Host service traits (clock, battery, link, outbox, haptics, redraw)
//! - Device state store with one mutation entry point per event source
//! - Clock driver (texts, timewarp colour, weather refresh cadence)
//! - Weather channel over the companion message transport
//! - Icon resolution and dirty-region tracking
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod icon;
pub mod render;
pub mod state;
pub mod traits;
pub mod watchface;
pub mod weather;

pub use config::WatchfaceConfig;
pub use icon::IconId;
pub use render::{Region, RegionSet, RenderDispatcher};
pub use watchface::Watchface;
