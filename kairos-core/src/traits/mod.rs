//! Host service traits
//!
//! These traits define the interface between the watchface logic and the
//! host platform that delivers callbacks and owns the hardware.

pub mod clock;
pub mod display;
pub mod haptics;
pub mod link;
pub mod power;

pub use clock::WallClock;
pub use display::RedrawScheduler;
pub use haptics::Vibration;
pub use link::{BluetoothLink, MessageOutbox};
pub use power::{BatteryChargeState, BatteryMonitor};

/// Every host service the watchface consumes
///
/// Implemented automatically for any type providing all of them.
pub trait Host:
    WallClock + BatteryMonitor + BluetoothLink + MessageOutbox + Vibration + RedrawScheduler
{
}

impl<T> Host for T where
    T: WallClock + BatteryMonitor + BluetoothLink + MessageOutbox + Vibration + RedrawScheduler
{
}
