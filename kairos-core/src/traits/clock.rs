//! Wall-clock source trait

use chrono::NaiveDateTime;

/// Trait for the host time service
///
/// Ticks arrive separately as callbacks; this is only read at startup and
/// when the display preference is needed.
pub trait WallClock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Host preference for 24-hour display
    fn is_24h_style(&self) -> bool;
}
