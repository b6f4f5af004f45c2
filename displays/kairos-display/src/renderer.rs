//! Region renderer
//!
//! Draws the regions the watchface reports dirty. Each region paints its
//! own rectangle completely, so regions can be drawn in any subset.

use kairos_core::{Region, RegionSet, Watchface};

use crate::backend::{Color, DisplayBackend, DisplayError};
use crate::battery::BatteryMeter;
use crate::layout::{
    self, BLUETOOTH_ICON_RESOURCE, CHARGE_ICON_RESOURCE, TEXT_FONT, TIME_FONT, WEATHER_ICON_RECT,
    WEATHER_TEXT_RECT,
};
use crate::text::weather_line;

/// Draws dirty regions through a [`DisplayBackend`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    frames: u32,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames flushed so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Draw everything pending, then flush
    ///
    /// Nothing is taken from the watchface while the display is not ready,
    /// so the pending regions survive until the next attempt. A draw or
    /// flush error hands the taken regions back before it is returned.
    /// Returns the regions drawn.
    pub fn render<D: DisplayBackend + ?Sized>(
        &mut self,
        face: &mut Watchface,
        display: &mut D,
    ) -> Result<RegionSet, DisplayError> {
        if !display.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        let dirty = face.take_dirty();
        if dirty.is_empty() {
            return Ok(dirty);
        }

        if let Err(e) = self
            .draw(face, dirty, display)
            .and_then(|()| display.flush())
        {
            face.restore_dirty(dirty);
            return Err(e);
        }
        self.frames = self.frames.wrapping_add(1);
        Ok(dirty)
    }

    /// Draw a set of regions in draw order without flushing
    pub fn draw<D: DisplayBackend + ?Sized>(
        &mut self,
        face: &Watchface,
        regions: RegionSet,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        for region in regions.iter() {
            draw_region(face, region, display)?;
        }
        Ok(())
    }
}

/// Draw one region from current watchface state
pub fn draw_region<D: DisplayBackend + ?Sized>(
    face: &Watchface,
    region: Region,
    display: &mut D,
) -> Result<(), DisplayError> {
    let rect = layout::region_rect(region);
    let state = face.state();

    match region {
        Region::Time => {
            display.clear_rect(rect)?;
            display.draw_text(rect, face.clock().time_text(), TIME_FONT, Color::Black)
        }
        Region::Date => {
            display.clear_rect(rect)?;
            display.draw_text(rect, face.clock().date_text(), TEXT_FONT, Color::Black)
        }
        Region::Weather => {
            display.clear_rect(rect)?;
            let weather = state.weather();
            if let Some(resource) = weather.icon.resource_name() {
                display.draw_bitmap(WEATHER_ICON_RECT, resource)?;
            }
            display.draw_text(
                WEATHER_TEXT_RECT,
                weather_line(weather).as_str(),
                TEXT_FONT,
                Color::Black,
            )
        }
        Region::Battery => BatteryMeter::new(state.battery_percent()).draw(display),
        Region::ChargeIcon => {
            display.clear_rect(rect)?;
            if state.is_charging() {
                display.draw_bitmap(rect, CHARGE_ICON_RESOURCE)?;
            }
            Ok(())
        }
        Region::BluetoothIcon => {
            display.clear_rect(rect)?;
            if !state.bluetooth_connected() {
                display.draw_bitmap(rect, BLUETOOTH_ICON_RESOURCE)?;
            }
            Ok(())
        }
        Region::Timewarp => display.fill_rect(rect, face.clock().color().into(), 0),
    }
}
