//! Weather line text

use core::fmt::Write;
use heapless::String;
use kairos_core::state::WeatherState;

/// Capacity of the weather line: widest temperature, separator, conditions
pub const WEATHER_TEXT_LEN: usize = 48;

/// Shown until the first weather field arrives
pub const LOADING_TEXT: &str = "Loading...";

/// Shown in place of a temperature not yet reported
pub const MISSING_TEMPERATURE: &str = "--";

/// `"{temp}C, {conditions}"`, or [`LOADING_TEXT`] before any data
pub fn weather_line(weather: &WeatherState) -> String<WEATHER_TEXT_LEN> {
    let mut text = String::new();
    if !weather.has_data() {
        let _ = text.push_str(LOADING_TEXT);
        return text;
    }

    let _ = match weather.temperature_c {
        Some(t) => write!(text, "{}C, {}", t, weather.conditions.as_str()),
        None => write!(
            text,
            "{}C, {}",
            MISSING_TEMPERATURE,
            weather.conditions.as_str()
        ),
    };
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_core::IconId;

    #[test]
    fn test_loading_before_data() {
        assert_eq!(weather_line(&WeatherState::default()).as_str(), "Loading...");
    }

    #[test]
    fn test_full_line() {
        let mut weather = WeatherState::default();
        weather.temperature_c = Some(-4);
        let _ = weather.conditions.push_str("Light snow");
        assert_eq!(weather_line(&weather).as_str(), "-4C, Light snow");
    }

    #[test]
    fn test_missing_temperature() {
        let mut weather = WeatherState::default();
        let _ = weather.conditions.push_str("Clear");
        assert_eq!(weather_line(&weather).as_str(), "--C, Clear");
    }

    #[test]
    fn test_icon_only_is_data() {
        let mut weather = WeatherState::default();
        weather.icon = IconId::Mist;
        assert_eq!(weather_line(&weather).as_str(), "--C, ");
    }

    #[test]
    fn test_widest_line_fits() {
        let mut weather = WeatherState::default();
        weather.temperature_c = Some(i32::MIN);
        for _ in 0..31 {
            let _ = weather.conditions.push('W');
        }
        let line = weather_line(&weather);
        assert!(line.ends_with(weather.conditions.as_str()));
    }
}
