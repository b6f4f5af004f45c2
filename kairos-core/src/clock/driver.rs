//! Tick handling
//!
//! Turns each host tick into refreshed clock texts and colour, and decides
//! whether the tick falls on a weather refresh boundary.

use chrono::NaiveDateTime;
use heapless::String;

use super::snapshot::{ClockSnapshot, MinuteKey, TimewarpColor, DATE_TEXT_LEN, TIME_TEXT_LEN};
use crate::config::{TickUnit, WatchfaceConfig};
use crate::render::{Region, RenderDispatcher};
use crate::traits::MessageOutbox;
use crate::weather::WeatherChannel;

/// Clock region state and refresh cadence
#[derive(Debug, Clone, Default)]
pub struct ClockDriver {
    snapshot: Option<ClockSnapshot>,
    time_text: String<TIME_TEXT_LEN>,
    date_text: String<DATE_TEXT_LEN>,
    color: TimewarpColor,
    /// Minute of the last refresh request (second ticks only)
    last_refresh: Option<MinuteKey>,
}

impl ClockDriver {
    /// Create a driver that has not seen a tick yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute texts and colour from a wall-clock reading
    ///
    /// Time and date are marked on every call. The timewarp band is marked
    /// when ticking per second, when its colour moved, or on first update.
    pub fn update(
        &mut self,
        now: &NaiveDateTime,
        use_24h: bool,
        config: &WatchfaceConfig,
        render: &mut RenderDispatcher,
    ) -> ClockSnapshot {
        let snapshot = ClockSnapshot::from_datetime(now);
        let color = snapshot.timewarp();
        let first = self.snapshot.is_none();

        self.time_text = snapshot.time_text(use_24h);
        self.date_text = snapshot.date_text(config.date_style);

        render.mark_dirty(Region::Time);
        render.mark_dirty(Region::Date);
        if first || config.tick_unit == TickUnit::Second || color != self.color {
            render.mark_dirty(Region::Timewarp);
        }

        self.color = color;
        self.snapshot = Some(snapshot);
        snapshot
    }

    /// Tick callback
    ///
    /// Updates the clock regions, then requests weather if this minute is a
    /// refresh boundary. Returns true if a request was issued.
    pub fn on_tick<O: MessageOutbox + ?Sized>(
        &mut self,
        now: &NaiveDateTime,
        use_24h: bool,
        config: &WatchfaceConfig,
        render: &mut RenderDispatcher,
        weather: &mut WeatherChannel,
        outbox: &mut O,
    ) -> bool {
        let snapshot = self.update(now, use_24h, config, render);
        trace!("Tick {}:{}:{}", snapshot.hour, snapshot.minute, snapshot.second);

        if !self.refresh_due(&snapshot, config) {
            return false;
        }

        info!("Refresh boundary at minute {}", snapshot.minute);
        weather.send_request(outbox);
        true
    }

    /// Whether this tick should request weather
    ///
    /// Per-minute ticks fire on every qualifying minute. Per-second ticks
    /// fire only on the first tick seen within a qualifying minute.
    fn refresh_due(&mut self, snapshot: &ClockSnapshot, config: &WatchfaceConfig) -> bool {
        if !config.is_refresh_minute(snapshot.minute) {
            return false;
        }
        if config.tick_unit == TickUnit::Minute {
            return true;
        }

        let key = snapshot.minute_key();
        if self.last_refresh == Some(key) {
            return false;
        }
        self.last_refresh = Some(key);
        true
    }

    /// Most recent snapshot, `None` before the first tick
    pub fn snapshot(&self) -> Option<&ClockSnapshot> {
        self.snapshot.as_ref()
    }

    /// Time-of-day text
    pub fn time_text(&self) -> &str {
        self.time_text.as_str()
    }

    /// Date text
    pub fn date_text(&self) -> &str {
        self.date_text.as_str()
    }

    /// Current timewarp colour
    pub fn color(&self) -> TimewarpColor {
        self.color
    }
}
