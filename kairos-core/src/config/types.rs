//! Configuration type definitions
//!
//! These types represent the watchface settings. The host may deliver them
//! as a postcard-serialized blob; every field has a default so a watchface
//! without settings behaves like the stock face.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current settings layout version
pub const CONFIG_VERSION: u8 = 1;

/// Default weather refresh cadence in minutes
pub const DEFAULT_REFRESH_MINUTES: u8 = 30;

/// Upper bound of an encoded config
pub const MAX_CONFIG_SIZE: usize = 16;

/// Tick granularity requested from the host time service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TickUnit {
    /// One tick per second (smooth timewarp band, higher power draw)
    Second,
    /// One tick per minute
    #[default]
    Minute,
}

/// Time-of-day display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// Use the host's 12/24-hour preference
    #[default]
    FollowHost,
    /// Always `hh:MM`, 01-12
    TwelveHour,
    /// Always `HH:MM`, 00-23
    TwentyFourHour,
}

impl ClockStyle {
    /// Resolve against the host preference
    pub fn use_24h(&self, host_prefers_24h: bool) -> bool {
        match self {
            ClockStyle::FollowHost => host_prefers_24h,
            ClockStyle::TwelveHour => false,
            ClockStyle::TwentyFourHour => true,
        }
    }
}

/// Date display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateStyle {
    /// `YYYY/MM/DD`
    #[default]
    Slashed,
    /// `YYYY-MM-DD`
    Iso,
}

/// Errors from validating or decoding settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval outside 1..=60 minutes
    InvalidRefreshInterval(u8),
    /// Blob written by a different settings layout
    VersionMismatch(u8),
    /// Blob could not be decoded
    Decode,
    /// Buffer too small to encode into
    Encode,
}

/// Watchface settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchfaceConfig {
    /// Layout version, must equal [`CONFIG_VERSION`]
    pub version: u8,
    /// Tick granularity
    pub tick_unit: TickUnit,
    /// Time-of-day style
    pub clock_style: ClockStyle,
    /// Date style
    pub date_style: DateStyle,
    /// Request weather when `minute % weather_refresh_minutes == 0`
    pub weather_refresh_minutes: u8,
    /// Double pulse when the companion link drops
    pub vibrate_on_disconnect: bool,
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            tick_unit: TickUnit::Minute,
            clock_style: ClockStyle::FollowHost,
            date_style: DateStyle::Slashed,
            weather_refresh_minutes: DEFAULT_REFRESH_MINUTES,
            vibrate_on_disconnect: true,
        }
    }
}

impl WatchfaceConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch(self.version));
        }
        if !(1..=60).contains(&self.weather_refresh_minutes) {
            return Err(ConfigError::InvalidRefreshInterval(
                self.weather_refresh_minutes,
            ));
        }
        Ok(())
    }

    /// Whether a wall-clock minute is a weather refresh boundary
    pub fn is_refresh_minute(&self, minute: u8) -> bool {
        // Unvalidated configs may carry zero
        self.weather_refresh_minutes != 0 && minute % self.weather_refresh_minutes == 0
    }

    /// Decode and validate a settings blob
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buffer`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = WatchfaceConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.weather_refresh_minutes, 30);
        assert_eq!(config.tick_unit, TickUnit::Minute);
    }

    #[test]
    fn test_refresh_interval_bounds() {
        let mut config = WatchfaceConfig::default();
        config.weather_refresh_minutes = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRefreshInterval(0)));
        assert!(!config.is_refresh_minute(0));

        config.weather_refresh_minutes = 61;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRefreshInterval(61)));

        config.weather_refresh_minutes = 60;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_default_refresh_minutes() {
        let config = WatchfaceConfig::default();
        for minute in [0, 30] {
            assert!(config.is_refresh_minute(minute));
        }
        for minute in [1, 15, 29, 31, 59] {
            assert!(!config.is_refresh_minute(minute));
        }
    }

    #[test]
    fn test_clock_style() {
        assert!(ClockStyle::FollowHost.use_24h(true));
        assert!(!ClockStyle::FollowHost.use_24h(false));
        assert!(!ClockStyle::TwelveHour.use_24h(true));
        assert!(ClockStyle::TwentyFourHour.use_24h(false));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_blob_decode() {
        let config = WatchfaceConfig {
            tick_unit: TickUnit::Second,
            clock_style: ClockStyle::TwentyFourHour,
            date_style: DateStyle::Iso,
            weather_refresh_minutes: 15,
            ..WatchfaceConfig::default()
        };
        let mut buffer = [0u8; MAX_CONFIG_SIZE];
        let len = config.to_slice(&mut buffer).unwrap().len();

        assert_eq!(WatchfaceConfig::from_bytes(&buffer[..len]), Ok(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_blob_rejects_bad_values() {
        let config = WatchfaceConfig {
            weather_refresh_minutes: 90,
            ..WatchfaceConfig::default()
        };
        let mut buffer = [0u8; MAX_CONFIG_SIZE];
        let len = config.to_slice(&mut buffer).unwrap().len();
        assert_eq!(
            WatchfaceConfig::from_bytes(&buffer[..len]),
            Err(ConfigError::InvalidRefreshInterval(90))
        );

        let stale = WatchfaceConfig {
            version: CONFIG_VERSION + 1,
            ..WatchfaceConfig::default()
        };
        let len = stale.to_slice(&mut buffer).unwrap().len();
        assert_eq!(
            WatchfaceConfig::from_bytes(&buffer[..len]),
            Err(ConfigError::VersionMismatch(CONFIG_VERSION + 1))
        );

        assert_eq!(WatchfaceConfig::from_bytes(&[]), Err(ConfigError::Decode));
    }
}
