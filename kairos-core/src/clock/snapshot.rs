//! Clock snapshot and derived display values

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use core::fmt::Write;
use heapless::String;

use crate::config::DateStyle;

/// Capacity of the time-of-day text ("00:00")
pub const TIME_TEXT_LEN: usize = 8;

/// Capacity of the date text ("yyyy/mm/dd")
pub const DATE_TEXT_LEN: usize = 16;

/// Highest second value a snapshot carries (two leap seconds)
pub const MAX_SECOND: u8 = 61;

/// Wall-clock fields captured at one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: i32,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-61
    pub second: u8,
    pub weekday: Weekday,
}

/// Identifies one wall-clock minute
pub type MinuteKey = (i32, u8, u8, u8, u8);

impl ClockSnapshot {
    /// Capture from a chrono datetime
    ///
    /// A chrono leap second (nanosecond past one billion) becomes second 60.
    pub fn from_datetime(now: &NaiveDateTime) -> Self {
        let leap = now.nanosecond() >= 1_000_000_000;
        Self {
            year: now.year(),
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8 + u8::from(leap),
            weekday: now.weekday(),
        }
    }

    /// Three-letter English weekday
    pub fn weekday_abbrev(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Hour on a 12-hour dial, 1-12
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// `HH:MM` or zero-padded `hh:MM`
    pub fn time_text(&self, use_24h: bool) -> String<TIME_TEXT_LEN> {
        let hour = if use_24h { self.hour } else { self.hour12() };
        let mut text = String::new();
        let _ = write!(text, "{:02}:{:02}", hour, self.minute);
        text
    }

    /// Date in the configured style
    pub fn date_text(&self, style: DateStyle) -> String<DATE_TEXT_LEN> {
        let sep = match style {
            DateStyle::Slashed => '/',
            DateStyle::Iso => '-',
        };
        let mut text = String::new();
        let _ = write!(
            text,
            "{:04}{}{:02}{}{:02}",
            self.year, sep, self.month, sep, self.day
        );
        text
    }

    /// Key of the wall-clock minute this snapshot falls in
    pub fn minute_key(&self) -> MinuteKey {
        (self.year, self.month, self.day, self.hour, self.minute)
    }

    /// Colour derived from this snapshot
    pub fn timewarp(&self) -> TimewarpColor {
        TimewarpColor::from_hms(self.hour, self.minute, self.second)
    }
}

/// Time-derived colour: each channel scales one clock field onto 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimewarpColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl TimewarpColor {
    /// `round(hour/23·255)`, `round(minute/59·255)`, `round(second/61·255)`
    ///
    /// Out-of-range inputs saturate at the top of their scale.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            red: scale(hour, 23),
            green: scale(minute, 59),
            blue: scale(second, MAX_SECOND),
        }
    }

    /// Pack into RGB888
    pub fn to_rgb888(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

/// Round-half-up of `value / max * 255` in integer arithmetic
fn scale(value: u8, max: u8) -> u8 {
    let v = u32::from(value.min(max));
    let max = u32::from(max);
    ((v * 255 + max / 2) / max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_from_datetime() {
        let snap = ClockSnapshot::from_datetime(&at(2024, 3, 5, 14, 7, 9));
        assert_eq!(snap.year, 2024);
        assert_eq!((snap.month, snap.day), (3, 5));
        assert_eq!((snap.hour, snap.minute, snap.second), (14, 7, 9));
        assert_eq!(snap.weekday_abbrev(), "Tue");
    }

    #[test]
    fn test_leap_second() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        let snap = ClockSnapshot::from_datetime(&leap);
        assert_eq!(snap.second, 60);
    }

    #[test]
    fn test_time_text_styles() {
        let snap = ClockSnapshot::from_datetime(&at(2024, 3, 5, 14, 7, 0));
        assert_eq!(snap.time_text(true).as_str(), "14:07");
        assert_eq!(snap.time_text(false).as_str(), "02:07");

        let midnight = ClockSnapshot::from_datetime(&at(2024, 3, 5, 0, 0, 0));
        assert_eq!(midnight.time_text(true).as_str(), "00:00");
        assert_eq!(midnight.time_text(false).as_str(), "12:00");

        let noon = ClockSnapshot::from_datetime(&at(2024, 3, 5, 12, 30, 0));
        assert_eq!(noon.time_text(false).as_str(), "12:30");
    }

    #[test]
    fn test_date_text_styles() {
        let snap = ClockSnapshot::from_datetime(&at(2024, 3, 5, 9, 0, 0));
        assert_eq!(snap.date_text(DateStyle::Slashed).as_str(), "2024/03/05");
        assert_eq!(snap.date_text(DateStyle::Iso).as_str(), "2024-03-05");
    }

    #[test]
    fn test_timewarp_extremes() {
        assert_eq!(
            TimewarpColor::from_hms(23, 59, 61),
            TimewarpColor { red: 255, green: 255, blue: 255 }
        );
        assert_eq!(
            TimewarpColor::from_hms(0, 0, 0),
            TimewarpColor { red: 0, green: 0, blue: 0 }
        );
    }

    #[test]
    fn test_timewarp_matches_float_rounding() {
        for v in 0..=61u8 {
            let expect = |max: u8| ((f64::from(v.min(max)) / f64::from(max)) * 255.0).round() as u8;
            let color = TimewarpColor::from_hms(v.min(23), v.min(59), v);
            assert_eq!(color.red, expect(23), "hour {}", v);
            assert_eq!(color.green, expect(59), "minute {}", v);
            assert_eq!(color.blue, expect(61), "second {}", v);
        }
    }

    #[test]
    fn test_timewarp_saturates() {
        assert_eq!(TimewarpColor::from_hms(30, 70, 99).to_rgb888(), 0xFF_FF_FF);
        assert_eq!(TimewarpColor::from_hms(12, 0, 0).to_rgb888(), 0x85_00_00);
    }
}
