//! Vibration motor trait

/// Trait for the host haptic alert
pub trait Vibration {
    /// Fire a short double pulse
    fn double_pulse(&mut self);
}
