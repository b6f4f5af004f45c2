//! Configuration types
//!
//! Watchface settings delivered by the host as postcard binary data.

pub mod types;

pub use types::*;
