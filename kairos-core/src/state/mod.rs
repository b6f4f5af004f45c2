//! Device state
//!
//! Holds the latest battery, charging, link and weather values. The state
//! is owned, not global: the watchface owns one store and lends it to each
//! callback in turn.

pub mod device;
pub mod store;

pub use device::{DeviceState, WeatherState, MAX_BATTERY_PERCENT};
pub use store::DeviceStateStore;
