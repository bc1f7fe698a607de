//! Canonical telemetry layer over `hwgear-api` for HW group appliances
//! (Poseidon environmental units and HWg-SMS gateways).
//!
//! This crate owns the domain model and the normalization rules that make
//! two incompatible firmware dialects look identical to consumers:
//!
//! - **[`Monitor`]** -- per-device facade. [`poll()`](Monitor::poll) runs one
//!   fetch/parse/normalize cycle and, for gateways, folds in derived modem
//!   readings from the secondary status document. Commands (`set_output`,
//!   `send_sms`, `place_call`) pass through to the wire client.
//!
//! - **Domain model** ([`model`]) -- [`PollResult`] snapshots holding
//!   [`DeviceIdentity`], [`Reading`]s with [`ReadingValue`] and
//!   [`SensorCategory`], [`BinaryInput`]s and [`RelayOutput`]s, all with
//!   uniform defaults regardless of which dialect the device spoke.
//!
//! - **Normalization** ([`convert`], [`classify`], [`gateway`]) -- the
//!   degrade policy (drop a record only when its id or value is missing),
//!   the single truthy-state set for booleans, family and unit inference
//!   from free text, and the gateway's derived readings.
//!
//! Polling is caller-driven: nothing here spawns tasks or keeps timers.

pub mod classify;
pub mod config;
pub mod convert;
pub mod gateway;
pub mod model;
pub mod monitor;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_PORT, DeviceConfig};
pub use model::{
    BinaryInput, BinaryInputKind, DeviceFamily, DeviceIdentity, PollResult, Reading, ReadingValue,
    RelayOutput, SensorCategory,
};
pub use monitor::Monitor;

// The api crate's error is the error type of this crate too; polls have
// exactly one failure source.
pub use hwgear_api::{DeviceClient, Error, TransportConfig};
