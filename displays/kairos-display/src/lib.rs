//! Region layout and draw logic for the Kairos watchface
//!
//! This crate provides:
//! - `DisplayBackend` trait the host graphics context implements
//! - Fixed 144x168 layout with one disjoint rectangle per region
//! - Battery meter geometry and colour category
//! - Weather line text
//! - `Renderer` that draws the regions a `Watchface` reports dirty
//!
//! # Architecture
//!
//! The core decides *that* a region needs redrawing and forwards an
//! invalidation to the host. When the host is ready to draw it calls
//! [`Renderer::render`], which takes the pending regions and paints each
//! one from current state. Nothing here holds state of its own beyond a
//! frame counter.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod battery;
pub mod layout;
pub mod renderer;
pub mod text;

// Re-export key types
pub use backend::{Color, DisplayBackend, DisplayError, Font, Rect};
pub use battery::{BarColor, BatteryMeter};
pub use renderer::{draw_region, Renderer};
pub use text::weather_line;
