//! Weather condition code to icon resolution
//!
//! Codes follow the `{2 digits}{d|n}` form used by the companion's weather
//! source. Several codes share one icon; the table is the single source of
//! truth and is never mutated.

/// Weather icons available as display resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconId {
    ClearDay,
    ClearNight,
    FewCloudsDay,
    FewCloudsNight,
    ScatteredClouds,
    BrokenClouds,
    ShowerRain,
    RainDay,
    RainNight,
    Thunderstorm,
    Snow,
    Mist,
    /// Code not in the table
    #[default]
    Unknown,
}

/// Condition code → icon
pub static ICON_TABLE: [(&str, IconId); 18] = [
    ("01d", IconId::ClearDay),
    ("01n", IconId::ClearNight),
    ("02d", IconId::FewCloudsDay),
    ("02n", IconId::FewCloudsNight),
    ("03d", IconId::ScatteredClouds),
    ("03n", IconId::ScatteredClouds),
    ("04d", IconId::BrokenClouds),
    ("04n", IconId::BrokenClouds),
    ("09d", IconId::ShowerRain),
    ("09n", IconId::ShowerRain),
    ("10d", IconId::RainDay),
    ("10n", IconId::RainNight),
    ("11d", IconId::Thunderstorm),
    ("11n", IconId::Thunderstorm),
    ("13d", IconId::Snow),
    ("13n", IconId::Snow),
    ("50d", IconId::Mist),
    ("50n", IconId::Mist),
];

impl IconId {
    /// Every displayable icon
    pub const KNOWN: [IconId; 12] = [
        IconId::ClearDay,
        IconId::ClearNight,
        IconId::FewCloudsDay,
        IconId::FewCloudsNight,
        IconId::ScatteredClouds,
        IconId::BrokenClouds,
        IconId::ShowerRain,
        IconId::RainDay,
        IconId::RainNight,
        IconId::Thunderstorm,
        IconId::Snow,
        IconId::Mist,
    ];

    /// Returns true for any icon except `Unknown`
    pub fn is_known(&self) -> bool {
        !matches!(self, IconId::Unknown)
    }

    /// Name of the bitmap resource the host loads for this icon
    pub fn resource_name(&self) -> Option<&'static str> {
        let name = match self {
            IconId::ClearDay => "IMAGE_CLEAR_DAY",
            IconId::ClearNight => "IMAGE_CLEAR_NIGHT",
            IconId::FewCloudsDay => "IMAGE_FEW_CLOUDS_DAY",
            IconId::FewCloudsNight => "IMAGE_FEW_CLOUDS_NIGHT",
            IconId::ScatteredClouds => "IMAGE_SCATTERED_CLOUDS",
            IconId::BrokenClouds => "IMAGE_BROKEN_CLOUDS",
            IconId::ShowerRain => "IMAGE_SHOWER_RAIN",
            IconId::RainDay => "IMAGE_RAIN_DAY",
            IconId::RainNight => "IMAGE_RAIN_NIGHT",
            IconId::Thunderstorm => "IMAGE_THUNDERSTORM",
            IconId::Snow => "IMAGE_SNOW",
            IconId::Mist => "IMAGE_MIST",
            IconId::Unknown => return None,
        };
        Some(name)
    }
}

/// Resolve a condition code to its icon
///
/// Total over all inputs: anything not in [`ICON_TABLE`] is `Unknown`.
pub fn resolve(code: &str) -> IconId {
    ICON_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, icon)| *icon)
        .unwrap_or(IconId::Unknown)
}
