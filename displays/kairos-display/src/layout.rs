//! Fixed 144x168 screen layout
//!
//! Every region owns a disjoint rectangle, so redrawing one region never
//! disturbs another.

use kairos_core::Region;

use crate::backend::{Font, Rect};

/// Screen width in pixels
pub const SCREEN_WIDTH: u16 = 144;

/// Screen height in pixels
pub const SCREEN_HEIGHT: u16 = 168;

/// Whole screen
pub const SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

pub const TIMEWARP_RECT: Rect = Rect::new(0, 0, SCREEN_WIDTH, 8);
pub const BLUETOOTH_ICON_RECT: Rect = Rect::new(59, 12, 30, 30);
pub const BATTERY_RECT: Rect = Rect::new(12, 54, 115, 8);
pub const CHARGE_ICON_RECT: Rect = Rect::new(130, 52, 12, 12);
pub const TIME_RECT: Rect = Rect::new(0, 64, SCREEN_WIDTH, 50);
pub const WEATHER_RECT: Rect = Rect::new(0, 114, SCREEN_WIDTH, 26);
pub const DATE_RECT: Rect = Rect::new(0, 140, SCREEN_WIDTH, 26);

/// Weather icon, left edge of the weather region
pub const WEATHER_ICON_RECT: Rect = Rect::new(2, 115, 24, 24);

/// Weather text, right of the icon
pub const WEATHER_TEXT_RECT: Rect = Rect::new(28, 114, SCREEN_WIDTH - 28, 26);

pub const TIME_FONT: Font = Font::Bitham42Bold;
pub const TEXT_FONT: Font = Font::Gothic24;

/// Bitmap shown while the companion link is down
pub const BLUETOOTH_ICON_RESOURCE: &str = "IMAGE_BT_ICON";

/// Bitmap shown while charging
pub const CHARGE_ICON_RESOURCE: &str = "IMAGE_CHARGING";

/// Screen rectangle owned by a region
pub const fn region_rect(region: Region) -> Rect {
    match region {
        Region::Time => TIME_RECT,
        Region::Date => DATE_RECT,
        Region::Weather => WEATHER_RECT,
        Region::Battery => BATTERY_RECT,
        Region::ChargeIcon => CHARGE_ICON_RECT,
        Region::BluetoothIcon => BLUETOOTH_ICON_RECT,
        Region::Timewarp => TIMEWARP_RECT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_on_screen() {
        for region in Region::ALL {
            assert!(SCREEN.contains(&region_rect(region)), "{:?}", region);
        }
    }

    #[test]
    fn test_regions_disjoint() {
        for (i, a) in Region::ALL.iter().enumerate() {
            for b in &Region::ALL[i + 1..] {
                assert!(
                    !region_rect(*a).overlaps(&region_rect(*b)),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_weather_parts_inside_region() {
        assert!(WEATHER_RECT.contains(&WEATHER_ICON_RECT));
        assert!(WEATHER_RECT.contains(&WEATHER_TEXT_RECT));
        assert!(!WEATHER_ICON_RECT.overlaps(&WEATHER_TEXT_RECT));
    }
}
