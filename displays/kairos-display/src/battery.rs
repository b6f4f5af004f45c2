//! Battery meter
//!
//! A rounded black frame with a coloured bar inset by two pixels on the
//! left and one on top and bottom. Bar width scales linearly with charge.

use crate::backend::{Color, DisplayBackend, DisplayError, Rect};
use crate::layout::BATTERY_RECT;

/// Bar width at 100%
pub const BAR_MAX_WIDTH: u16 = 111;

/// Bar offset inside the frame
const BAR_INSET_X: u16 = 2;
const BAR_INSET_Y: u16 = 1;

const FRAME_RADIUS: u8 = 4;
const BAR_RADIUS: u8 = 2;

/// Below this the bar is red
pub const LOW_THRESHOLD: u8 = 25;

/// Below this the bar is yellow
pub const MID_THRESHOLD: u8 = 50;

/// Bar colour category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarColor {
    Red,
    Yellow,
    Green,
}

impl From<BarColor> for Color {
    fn from(c: BarColor) -> Self {
        match c {
            BarColor::Red => Color::Red,
            BarColor::Yellow => Color::Yellow,
            BarColor::Green => Color::Green,
        }
    }
}

/// Meter geometry for one charge level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryMeter {
    percent: u8,
}

impl BatteryMeter {
    /// Levels above 100 are clamped
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// `percent * 111 / 100`, truncated
    pub fn bar_width(&self) -> u16 {
        u16::from(self.percent) * BAR_MAX_WIDTH / 100
    }

    pub fn bar_color(&self) -> BarColor {
        if self.percent < LOW_THRESHOLD {
            BarColor::Red
        } else if self.percent < MID_THRESHOLD {
            BarColor::Yellow
        } else {
            BarColor::Green
        }
    }

    /// Bar rectangle in screen coordinates
    pub fn bar_rect(&self) -> Rect {
        Rect::new(
            BATTERY_RECT.x + BAR_INSET_X,
            BATTERY_RECT.y + BAR_INSET_Y,
            self.bar_width(),
            BATTERY_RECT.height - 2 * BAR_INSET_Y,
        )
    }

    /// Draw frame then bar
    pub fn draw<D: DisplayBackend + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.fill_rect(BATTERY_RECT, Color::Black, FRAME_RADIUS)?;
        if self.bar_width() > 0 {
            display.fill_rect(self.bar_rect(), self.bar_color().into(), BAR_RADIUS)?;
        }
        Ok(())
    }
}
