//! Companion Message Protocol
//!
//! This crate defines the message protocol between the watch and its paired
//! companion device. The channel is asynchronous and best-effort: messages
//! may be dropped, sends may fail, and nothing is retried at this layer.
//!
//! # Protocol Overview
//!
//! Every message is a dictionary of typed tuples:
//! ```text
//! ┌───────┬─────────┬──────┬────────┬──────────┬─────┐
//! │ COUNT │ KEY     │ TYPE │ LENGTH │ VALUE    │ ... │
//! │ 1B    │ 4B (LE) │ 1B   │ 2B (LE)│ 0–64B    │     │
//! └───────┴─────────┴──────┴────────┴──────────┴─────┘
//! ```
//!
//! A value longer than 64 bytes is cut to 64 on decode rather than failing
//! the whole message.
//!
//! The watch sends a single refresh marker; the companion answers with any
//! subset of temperature, conditions and icon code.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dict;
pub mod messages;
pub mod result;

pub use dict::{
    DictError, Dictionary, Tuple, TupleType, MAX_DICT_SIZE, MAX_TUPLES, MAX_VALUE_SIZE,
};
pub use messages::{weather_fields, RefreshRequest, WeatherField, OUTBOX_SIZE};
pub use result::MessageResult;
