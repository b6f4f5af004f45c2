//! Battery service trait

/// Battery charge state as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryChargeState {
    /// Charge level in percent. Hosts may report values above 100.
    pub charge_percent: u8,
    /// Battery is currently charging
    pub is_charging: bool,
    /// Charger is connected
    pub is_plugged: bool,
}

impl BatteryChargeState {
    /// Discharging state at the given level
    pub const fn discharging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_charging: false,
            is_plugged: false,
        }
    }

    /// Charging state at the given level
    pub const fn charging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_charging: true,
            is_plugged: true,
        }
    }
}

/// Trait for the host battery service
///
/// Change notifications arrive as callbacks; `peek` is the synchronous read
/// used once at startup.
pub trait BatteryMonitor {
    /// Read the current charge state
    fn peek(&self) -> BatteryChargeState;
}
