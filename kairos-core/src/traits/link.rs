//! Companion link traits

use kairos_protocol::MessageResult;

/// Trait for the host Bluetooth connection service
pub trait BluetoothLink {
    /// Synchronous read of current connectivity, used once at startup
    fn is_connected(&self) -> bool;
}

/// Trait for the outbound side of the companion message channel
///
/// `send` only enqueues. Delivery is reported later through the
/// sent/failed callbacks; an `Err` here means the transport refused the
/// message outright (busy, too large, not connected).
pub trait MessageOutbox {
    /// Enqueue an encoded dictionary for delivery
    fn send(&mut self, payload: &[u8]) -> Result<(), MessageResult>;
}
