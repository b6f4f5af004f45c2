//! Drives a watchface through a full day of host callbacks

use chrono::{Duration, NaiveDate, NaiveDateTime};
use kairos_core::config::TickUnit;
use kairos_core::traits::{
    BatteryChargeState, BatteryMonitor, BluetoothLink, MessageOutbox, RedrawScheduler, Vibration,
    WallClock,
};
use kairos_core::{IconId, Region, Watchface, WatchfaceConfig};
use kairos_protocol::{Dictionary, MessageResult, RefreshRequest, WeatherField};

struct SimHost {
    now: NaiveDateTime,
    battery: BatteryChargeState,
    connected: bool,
    outbox: Vec<Vec<u8>>,
    pulses: u32,
    invalidations: usize,
}

impl SimHost {
    fn new(start: NaiveDateTime) -> Self {
        Self {
            now: start,
            battery: BatteryChargeState::discharging(100),
            connected: true,
            outbox: Vec::new(),
            pulses: 0,
            invalidations: 0,
        }
    }
}

impl WallClock for SimHost {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
    fn is_24h_style(&self) -> bool {
        true
    }
}

impl BatteryMonitor for SimHost {
    fn peek(&self) -> BatteryChargeState {
        self.battery
    }
}

impl BluetoothLink for SimHost {
    fn is_connected(&self) -> bool {
        self.connected
    }
}

impl MessageOutbox for SimHost {
    fn send(&mut self, payload: &[u8]) -> Result<(), MessageResult> {
        if !self.connected {
            return Err(MessageResult::NotConnected);
        }
        self.outbox.push(payload.to_vec());
        Ok(())
    }
}

impl Vibration for SimHost {
    fn double_pulse(&mut self) {
        self.pulses += 1;
    }
}

impl RedrawScheduler for SimHost {
    fn invalidate(&mut self, _region: Region) {
        self.invalidations += 1;
    }
}

fn midnight() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn weather_reply(temperature: i32, conditions: &str, icon: &str) -> Vec<u8> {
    let fields = [
        WeatherField::Temperature(temperature),
        WeatherField::Conditions(conditions.try_into().unwrap()),
        WeatherField::IconCode(icon.try_into().unwrap()),
    ];
    let mut dict = Dictionary::new();
    for field in &fields {
        dict.push(field.to_tuple().unwrap()).unwrap();
    }
    let bytes: heapless::Vec<u8, 128> = dict.encode_to_vec().unwrap();
    bytes.to_vec()
}

#[test]
fn test_day_at_minute_ticks() {
    let start = midnight();
    let mut host = SimHost::new(start);
    let mut face = Watchface::default();
    face.init(&mut host);
    face.take_dirty();

    let mut answered = 0;
    for minute in 0..24 * 60 {
        let now = start + Duration::minutes(minute);
        host.now = now;

        // Link drops for the 13:00 hour
        if minute == 13 * 60 {
            host.connected = false;
            face.on_bluetooth_changed(&mut host, false);
        }
        if minute == 14 * 60 {
            host.connected = true;
            face.on_bluetooth_changed(&mut host, true);
        }

        if minute % 10 == 0 {
            let percent = 100 - (minute / 15) as u8;
            let charge = BatteryChargeState::discharging(percent);
            host.battery = charge;
            face.on_battery_changed(&mut host, charge);
        }

        let sent_before = host.outbox.len();
        face.on_tick(&mut host, &now);

        if host.outbox.len() > sent_before {
            face.on_outbox_sent();
            let reply = if answered % 2 == 0 {
                weather_reply(-3, "Snow", "13d")
            } else {
                weather_reply(1, "Mist", "50n")
            };
            face.on_inbox_received(&mut host, &reply);
            answered += 1;
        }

        face.take_dirty();
    }

    // 48 boundaries, two of them inside the disconnected hour
    assert_eq!(host.outbox.len(), 46);
    for payload in &host.outbox {
        let dict = Dictionary::decode(payload).unwrap();
        assert!(RefreshRequest::matches(&dict));
    }

    let stats = face.channel_stats();
    assert_eq!(stats.requests_sent, 46);
    assert_eq!(stats.send_failures, 2);
    assert_eq!(stats.responses_received, 46);
    assert_eq!(stats.fields_skipped, 0);

    assert_eq!(host.pulses, 1);
    assert!(face.state().bluetooth_connected());
    assert_eq!(face.state().battery_percent(), 100 - (1430 / 15) as u8);

    let weather = face.state().weather();
    assert_eq!(weather.temperature_c, Some(1));
    assert_eq!(weather.conditions.as_str(), "Mist");
    assert_eq!(weather.icon, IconId::Mist);
    assert_eq!(face.clock().time_text(), "23:59");
    assert!(host.invalidations > 0);
}

#[test]
fn test_hour_at_second_ticks() {
    let start = midnight() + Duration::hours(6);
    let mut host = SimHost::new(start);
    let config = WatchfaceConfig {
        tick_unit: TickUnit::Second,
        ..WatchfaceConfig::default()
    };
    let mut face = Watchface::new(config);
    face.init(&mut host);

    for second in 0..60 * 60 {
        let now = start + Duration::seconds(second);
        face.on_tick(&mut host, &now);
        face.take_dirty();
    }

    // 06:00 and 06:30, once each
    assert_eq!(host.outbox.len(), 2);
    assert_eq!(face.clock().time_text(), "06:59");
    assert!(!face.state().weather().has_data());
}

#[test]
fn test_garbage_inbox_keeps_last_weather() {
    let mut host = SimHost::new(midnight());
    let mut face = Watchface::default();
    face.init(&mut host);

    face.on_inbox_received(&mut host, &weather_reply(12, "Rain", "10d"));
    face.on_inbox_received(&mut host, &[0xFF, 0x01]);
    face.on_inbox_dropped(&mut host, MessageResult::BufferOverflow);

    let weather = face.state().weather();
    assert_eq!(weather.temperature_c, Some(12));
    assert_eq!(weather.icon, IconId::RainDay);
    assert_eq!(face.channel_stats().responses_dropped, 2);
}
