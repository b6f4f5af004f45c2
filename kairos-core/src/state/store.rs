//! Device state store
//!
//! One narrow mutation entry point per event source. Each entry point marks
//! the regions its change affects. The host delivers callbacks serially, so
//! the store is owned by the watchface and borrowed mutably per callback;
//! no locking is involved.

use heapless::String;
use kairos_protocol::messages::MAX_CONDITIONS_LEN;

use super::device::{DeviceState, MAX_BATTERY_PERCENT};
use crate::icon::IconId;
use crate::render::{Region, RenderDispatcher};
use crate::traits::{BatteryChargeState, Vibration};

/// Owner of the single [`DeviceState`]
#[derive(Debug, Clone)]
pub struct DeviceStateStore {
    state: DeviceState,
    vibrate_on_disconnect: bool,
}

impl Default for DeviceStateStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DeviceStateStore {
    /// Create a store holding default state
    pub fn new(vibrate_on_disconnect: bool) -> Self {
        Self {
            state: DeviceState::default(),
            vibrate_on_disconnect,
        }
    }

    /// Current state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Battery service callback (also used for the startup peek)
    ///
    /// Level and charging flag are replaced together. The level is clamped
    /// to 0..=100.
    pub fn on_battery_changed(
        &mut self,
        charge: BatteryChargeState,
        render: &mut RenderDispatcher,
    ) {
        let percent = charge.charge_percent.min(MAX_BATTERY_PERCENT);
        let charging_changed = self.state.is_charging != charge.is_charging;

        debug!("Battery {}% charging={}", percent, charge.is_charging);

        self.state.battery_percent = percent;
        self.state.is_charging = charge.is_charging;

        render.mark_dirty(Region::Battery);
        if charging_changed {
            render.mark_dirty(Region::ChargeIcon);
        }
    }

    /// Startup read of link state
    ///
    /// Not a transition, so never alerts.
    pub fn init_bluetooth(&mut self, connected: bool, render: &mut RenderDispatcher) {
        debug!("Bluetooth initial connected={}", connected);
        self.state.bluetooth_connected = connected;
        render.mark_dirty(Region::BluetoothIcon);
    }

    /// Bluetooth service callback
    ///
    /// Fires one double pulse on a connected → disconnected transition.
    /// Returns true if the alert fired.
    pub fn on_bluetooth_changed<V: Vibration + ?Sized>(
        &mut self,
        connected: bool,
        render: &mut RenderDispatcher,
        haptics: &mut V,
    ) -> bool {
        let was_connected = self.state.bluetooth_connected;
        self.state.bluetooth_connected = connected;
        render.mark_dirty(Region::BluetoothIcon);

        let lost = was_connected && !connected;
        if lost {
            warn!("Companion link lost");
            if self.vibrate_on_disconnect {
                haptics.double_pulse();
                return true;
            }
        } else if !was_connected && connected {
            info!("Companion link restored");
        }
        false
    }

    pub(crate) fn set_vibrate_on_disconnect(&mut self, enabled: bool) {
        self.vibrate_on_disconnect = enabled;
    }

    pub(crate) fn set_temperature(&mut self, temperature_c: i32) {
        self.state.weather.temperature_c = Some(temperature_c);
    }

    pub(crate) fn set_conditions(&mut self, conditions: &String<MAX_CONDITIONS_LEN>) {
        self.state.weather.conditions.clone_from(conditions);
    }

    /// `Unknown` is never stored; the previous icon stays
    pub(crate) fn set_icon(&mut self, icon: IconId) -> bool {
        if icon.is_known() {
            self.state.weather.icon = icon;
            true
        } else {
            false
        }
    }
}
