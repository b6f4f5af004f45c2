//! Weather channel
//!
//! Best-effort request/response against the companion. A request is
//! enqueued and forgotten; responses arrive later as independent callbacks
//! with no correlation to any request, so every response is taken as the
//! answer to the most recent one. Nothing is retried and nothing times out:
//! on any failure the display keeps its last known weather.

use kairos_protocol::{weather_fields, Dictionary, MessageResult, RefreshRequest, WeatherField};

use crate::icon::{self, IconId};
use crate::render::{Region, RenderDispatcher};
use crate::state::DeviceStateStore;
use crate::traits::MessageOutbox;

/// Counters for channel activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelStats {
    /// Refresh requests accepted by the outbox
    pub requests_sent: u32,
    /// Sends refused by the outbox or reported failed later
    pub send_failures: u32,
    /// Failures from link or peer conditions that may clear on their own
    pub transient_failures: u32,
    /// Sends reported delivered
    pub send_successes: u32,
    /// Inbound deliveries processed
    pub responses_received: u32,
    /// Inbound messages discarded by the transport or undecodable
    pub responses_dropped: u32,
    /// Fields skipped as unrecognised or malformed
    pub fields_skipped: u32,
}

/// What one inbound delivery changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResponseSummary {
    /// Fields written to state
    pub applied: u8,
    /// Fields logged and skipped
    pub skipped: u8,
}

/// Outbound refresh / inbound weather protocol driver
#[derive(Debug, Clone, Default)]
pub struct WeatherChannel {
    stats: ChannelStats,
}

impl WeatherChannel {
    /// Create a channel with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Activity counters
    pub fn stats(&self) -> &ChannelStats {
        &self.stats
    }

    /// Enqueue a refresh request
    ///
    /// Never reports failure to the caller. A refusal from the transport is
    /// routed through [`Self::on_send_failed`].
    pub fn send_request<O: MessageOutbox + ?Sized>(&mut self, outbox: &mut O) {
        let payload = match RefreshRequest.encode() {
            Ok(payload) => payload,
            Err(e) => {
                error!("Refresh request encode failed: {:?}", e);
                self.on_send_failed(MessageResult::BufferOverflow);
                return;
            }
        };

        match outbox.send(&payload) {
            Ok(()) => {
                info!("Weather refresh requested");
                self.stats.requests_sent = self.stats.requests_sent.wrapping_add(1);
            }
            Err(reason) => self.on_send_failed(reason),
        }
    }

    /// Inbound payload callback: decode, then apply
    ///
    /// An undecodable payload changes nothing and counts as dropped.
    pub fn on_payload_received(
        &mut self,
        payload: &[u8],
        store: &mut DeviceStateStore,
        render: &mut RenderDispatcher,
    ) -> Option<ResponseSummary> {
        match Dictionary::decode(payload) {
            Ok(dict) => Some(self.on_response_received(&dict, store, render)),
            Err(e) => {
                error!("Inbound message malformed: {:?}", e);
                self.stats.responses_dropped = self.stats.responses_dropped.wrapping_add(1);
                None
            }
        }
    }

    /// Apply every field of one delivery
    ///
    /// Fields update state one at a time; a delivery carrying a subset
    /// leaves the other fields at their previous values. The weather region
    /// is marked once per delivery.
    pub fn on_response_received(
        &mut self,
        dict: &Dictionary,
        store: &mut DeviceStateStore,
        render: &mut RenderDispatcher,
    ) -> ResponseSummary {
        let mut summary = ResponseSummary::default();

        for field in weather_fields(dict) {
            let applied = match field {
                WeatherField::Temperature(t) => {
                    debug!("Temperature {}C", t);
                    store.set_temperature(t);
                    true
                }
                WeatherField::Conditions(ref text) => {
                    debug!("Conditions {}", text.as_str());
                    store.set_conditions(text);
                    true
                }
                WeatherField::IconCode(ref code) => match icon::resolve(code) {
                    IconId::Unknown => {
                        warn!("Icon code {} not recognised", code.as_str());
                        false
                    }
                    known => store.set_icon(known),
                },
                WeatherField::Malformed(key) => {
                    error!("Key {} has wrong value type", key);
                    false
                }
                WeatherField::Unrecognized(key) => {
                    error!("Key {} not recognised", key);
                    false
                }
            };

            if applied {
                summary.applied = summary.applied.saturating_add(1);
            } else {
                summary.skipped = summary.skipped.saturating_add(1);
            }
        }

        self.stats.responses_received = self.stats.responses_received.wrapping_add(1);
        self.stats.fields_skipped = self
            .stats
            .fields_skipped
            .wrapping_add(u32::from(summary.skipped));
        render.mark_dirty(Region::Weather);
        summary
    }

    /// Transport discarded an inbound message before delivery
    pub fn on_response_dropped(&mut self, reason: MessageResult) {
        warn!("Message dropped: {:?} ({})", reason, reason.code());
        self.stats.responses_dropped = self.stats.responses_dropped.wrapping_add(1);
    }

    /// Outbound send failed
    ///
    /// Link and peer conditions are expected in normal use and only warn;
    /// anything else is a local fault.
    pub fn on_send_failed(&mut self, reason: MessageResult) {
        if reason.is_transient() {
            warn!("Outbox send failed: {:?} ({})", reason, reason.code());
            self.stats.transient_failures = self.stats.transient_failures.wrapping_add(1);
        } else {
            error!("Outbox send failed: {:?} ({})", reason, reason.code());
        }
        self.stats.send_failures = self.stats.send_failures.wrapping_add(1);
    }

    /// Outbound send delivered
    pub fn on_send_succeeded(&mut self) {
        info!("Outbox send success");
        self.stats.send_successes = self.stats.send_successes.wrapping_add(1);
    }
}
