//! Display backend trait
//!
//! Defines the interface the renderer draws through. The host platform
//! implements it over its own graphics context.

use kairos_core::clock::TimewarpColor;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Rectangle outside the screen
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Bitmap resource could not be loaded
    MissingResource,
}

/// Screen rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside this rectangle
    pub const fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the rectangles share any pixel
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Fill and text colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Yellow,
    Green,
    /// Arbitrary 8-bit-per-channel colour
    Rgb(u8, u8, u8),
}

impl From<TimewarpColor> for Color {
    fn from(c: TimewarpColor) -> Self {
        Color::Rgb(c.red, c.green, c.blue)
    }
}

/// System fonts used by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Large bold digits for the time
    Bitham42Bold,
    /// Body text for date and weather
    Gothic24,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing the face's regions.
pub trait DisplayBackend {
    /// Fill a rectangle, optionally with rounded corners
    fn fill_rect(
        &mut self,
        rect: Rect,
        color: Color,
        corner_radius: u8,
    ) -> Result<(), DisplayError>;

    /// Draw text centred horizontally in `rect`
    fn draw_text(
        &mut self,
        rect: Rect,
        text: &str,
        font: Font,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Draw a named bitmap resource into `rect`
    fn draw_bitmap(&mut self, rect: Rect, resource: &'static str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions in pixels
    fn dimensions(&self) -> (u16, u16);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;

    /// Paint a rectangle with the window background
    fn clear_rect(&mut self, rect: Rect) -> Result<(), DisplayError> {
        self.fill_rect(rect, Color::White, 0)
    }
}
