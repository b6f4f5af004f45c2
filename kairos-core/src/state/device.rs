//! Device state snapshot
//!
//! The latest known value of every externally sourced field. Nothing here
//! is ever cleared: failures leave the last good value in place.

use heapless::String;
use kairos_protocol::messages::MAX_CONDITIONS_LEN;

use crate::icon::IconId;

/// Highest battery level kept
pub const MAX_BATTERY_PERCENT: u8 = 100;

/// Weather as last reported by the companion
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherState {
    /// Temperature in whole degrees Celsius, `None` until reported
    pub temperature_c: Option<i32>,
    /// Conditions text, empty until reported
    pub conditions: String<MAX_CONDITIONS_LEN>,
    /// Icon, `Unknown` until a recognised code arrives
    pub icon: IconId,
}

impl WeatherState {
    /// True once any weather field has been received
    pub fn has_data(&self) -> bool {
        self.temperature_c.is_some() || !self.conditions.is_empty() || self.icon.is_known()
    }
}

/// Everything the regions draw from, apart from the clock
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    pub(crate) battery_percent: u8,
    pub(crate) is_charging: bool,
    pub(crate) bluetooth_connected: bool,
    pub(crate) weather: WeatherState,
}

impl DeviceState {
    /// Battery level, always within 0..=100
    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    /// Charger reports charging
    pub fn is_charging(&self) -> bool {
        self.is_charging
    }

    /// Companion link is up
    pub fn bluetooth_connected(&self) -> bool {
        self.bluetooth_connected
    }

    /// Latest weather
    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }
}
