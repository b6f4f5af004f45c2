//! Watchface coordinator
//!
//! Owns every piece of mutable state and exposes one entry point per host
//! callback. The host delivers callbacks serially and never re-enters, so
//! each entry point borrows `self` mutably for its whole duration and ends
//! by forwarding the regions it dirtied to the host's redraw scheduler.

use chrono::NaiveDateTime;
use kairos_protocol::MessageResult;

use crate::clock::ClockDriver;
use crate::config::{ConfigError, WatchfaceConfig};
use crate::render::{RegionSet, RenderDispatcher};
use crate::state::{DeviceState, DeviceStateStore};
use crate::traits::{BatteryChargeState, Host};
use crate::weather::{ChannelStats, WeatherChannel};

/// The watchface: state store, clock, weather channel and render tracking
#[derive(Debug, Clone)]
pub struct Watchface {
    config: WatchfaceConfig,
    store: DeviceStateStore,
    clock: ClockDriver,
    weather: WeatherChannel,
    render: RenderDispatcher,
}

impl Default for Watchface {
    fn default() -> Self {
        Self::new(WatchfaceConfig::default())
    }
}

impl Watchface {
    /// Create a watchface with the given settings
    ///
    /// Nothing is drawn until [`Self::init`] runs.
    pub fn new(config: WatchfaceConfig) -> Self {
        Self {
            config,
            store: DeviceStateStore::new(config.vibrate_on_disconnect),
            clock: ClockDriver::new(),
            weather: WeatherChannel::new(),
            render: RenderDispatcher::new(),
        }
    }

    /// Window load: read every source once and dirty the whole screen
    ///
    /// Link state is read as a peek, never as a transition, so no alert
    /// fires here. No weather is requested; the first request waits for a
    /// refresh boundary.
    pub fn init<H: Host + ?Sized>(&mut self, host: &mut H) {
        info!("Watchface init");

        let now = host.now();
        let use_24h = self.use_24h(host);
        self.clock.update(&now, use_24h, &self.config, &mut self.render);

        let charge = host.peek();
        self.store.on_battery_changed(charge, &mut self.render);

        let connected = host.is_connected();
        self.store.init_bluetooth(connected, &mut self.render);

        self.render.mark_all();
        self.render.flush(host);
    }

    /// Time service tick
    pub fn on_tick<H: Host + ?Sized>(&mut self, host: &mut H, now: &NaiveDateTime) {
        let use_24h = self.use_24h(host);
        self.clock.on_tick(
            now,
            use_24h,
            &self.config,
            &mut self.render,
            &mut self.weather,
            host,
        );
        self.render.flush(host);
    }

    /// Battery service callback
    pub fn on_battery_changed<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        charge: BatteryChargeState,
    ) {
        self.store.on_battery_changed(charge, &mut self.render);
        self.render.flush(host);
    }

    /// Connection service callback
    pub fn on_bluetooth_changed<H: Host + ?Sized>(&mut self, host: &mut H, connected: bool) {
        self.store
            .on_bluetooth_changed(connected, &mut self.render, host);
        self.render.flush(host);
    }

    /// Inbox received callback
    pub fn on_inbox_received<H: Host + ?Sized>(&mut self, host: &mut H, payload: &[u8]) {
        self.weather
            .on_payload_received(payload, &mut self.store, &mut self.render);
        self.render.flush(host);
    }

    /// Inbox dropped callback
    pub fn on_inbox_dropped<H: Host + ?Sized>(&mut self, host: &mut H, reason: MessageResult) {
        self.weather.on_response_dropped(reason);
        self.render.flush(host);
    }

    /// Outbox failed callback
    pub fn on_outbox_failed(&mut self, reason: MessageResult) {
        self.weather.on_send_failed(reason);
    }

    /// Outbox sent callback
    pub fn on_outbox_sent(&mut self) {
        self.weather.on_send_succeeded();
    }

    /// Replace the settings
    ///
    /// Invalid settings are rejected and the current ones kept. Accepted
    /// settings redraw the whole screen on the next flush.
    pub fn apply_config<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        config: WatchfaceConfig,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        debug!("Config applied: {:?}", config);

        self.config = config;
        self.store.set_vibrate_on_disconnect(config.vibrate_on_disconnect);

        let now = host.now();
        let use_24h = self.use_24h(host);
        self.clock.update(&now, use_24h, &self.config, &mut self.render);
        self.render.mark_all();
        self.render.flush(host);
        Ok(())
    }

    /// Regions to draw now; marking them again re-arms invalidation
    pub fn take_dirty(&mut self) -> RegionSet {
        self.render.take_pending()
    }

    /// Hand back regions from [`Self::take_dirty`] that were not drawn
    pub fn restore_dirty(&mut self, regions: RegionSet) {
        self.render.restore(regions);
    }

    /// Active settings
    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    /// Device state
    pub fn state(&self) -> &DeviceState {
        self.store.state()
    }

    /// Clock texts and colour
    pub fn clock(&self) -> &ClockDriver {
        &self.clock
    }

    /// Weather channel counters
    pub fn channel_stats(&self) -> &ChannelStats {
        self.weather.stats()
    }

    fn use_24h<H: Host + ?Sized>(&self, host: &H) -> bool {
        self.config.clock_style.use_24h(host.is_24h_style())
    }
}
