// ── Raw-to-domain conversion ──
//
// Applies one degrade policy across all record types: a record missing its
// id or value is dropped with a debug line, every other missing field gets
// a default, and duplicate ids keep their first occurrence. A poll never
// fails because one record is odd.

use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;

use hwgear_api::{RawAgent, RawEntry, RawStatus};

use crate::classify::{classify_unit, infer_family};
use crate::model::{
    BinaryInput, BinaryInputKind, DeviceIdentity, PollResult, Reading, ReadingValue, RelayOutput,
};

/// Display name when the device reports none.
pub const FALLBACK_DEVICE_NAME: &str = "HW Group Device";
/// Identity fields (model, version, serial) when the device omits them.
pub const UNKNOWN_FIELD: &str = "Unknown";
/// State/alarm code when the device omits it.
const QUIESCENT_STATE: &str = "0";

/// Texts that count as "on". The single normalization point for every
/// boolean-like encoding the firmware generations emit (`1`, `ON`,
/// `active`, `True`, ...), compared case-insensitively.
const TRUTHY_STATES: [&str; 4] = ["1", "true", "on", "active"];

/// Normalize a device boolean text.
pub fn parse_bool_state(raw: &str) -> bool {
    let trimmed = raw.trim();
    TRUTHY_STATES
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

// ── Identity ────────────────────────────────────────────────────────

/// Build the identity block, inferring the family from the model text.
pub fn identity_from_agent(agent: &RawAgent) -> DeviceIdentity {
    let model = agent
        .model
        .clone()
        .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
    let family = infer_family(&model);
    DeviceIdentity {
        name: agent
            .name
            .clone()
            .unwrap_or_else(|| FALLBACK_DEVICE_NAME.to_string()),
        firmware_version: agent
            .version
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        serial: agent
            .serial
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        family,
        model,
    }
}

// ── Records ─────────────────────────────────────────────────────────

/// Admission rule shared by all record types: without an id and a value
/// there is nothing to present.
fn admit<'a>(entry: &'a RawEntry, kind: &str) -> Option<(&'a str, &'a str)> {
    match (entry.id.as_deref(), entry.value.as_deref()) {
        (Some(id), Some(value)) => Some((id, value)),
        _ => {
            debug!(kind, id = entry.id.as_deref(), "record missing id or value, dropped");
            None
        }
    }
}

/// Convert one sensor record, or drop it.
pub fn reading_from_entry(entry: &RawEntry) -> Option<Reading> {
    let (id, value) = admit(entry, "sensor")?;
    let unit = entry.unit.clone().unwrap_or_default();
    Some(Reading {
        id: id.to_string(),
        name: entry
            .name
            .clone()
            .unwrap_or_else(|| format!("Sensor {id}")),
        value: ReadingValue::parse(value),
        category: classify_unit(&unit),
        unit,
        state: entry
            .state
            .clone()
            .unwrap_or_else(|| QUIESCENT_STATE.to_string()),
    })
}

/// Convert one binary input record, or drop it.
pub fn binary_input_from_entry(entry: &RawEntry) -> Option<BinaryInput> {
    let (id, value) = admit(entry, "binary_input")?;
    Some(BinaryInput {
        id: id.to_string(),
        name: entry
            .name
            .clone()
            .unwrap_or_else(|| format!("Input {id}")),
        state: parse_bool_state(value),
        alarm_state: entry
            .state
            .clone()
            .unwrap_or_else(|| QUIESCENT_STATE.to_string()),
        kind: BinaryInputKind::Contact,
    })
}

/// Convert one relay output record, or drop it.
pub fn output_from_entry(entry: &RawEntry) -> Option<RelayOutput> {
    let (id, value) = admit(entry, "output")?;
    Some(RelayOutput {
        id: id.to_string(),
        name: entry
            .name
            .clone()
            .unwrap_or_else(|| format!("Output {id}")),
        state: parse_bool_state(value),
    })
}

// ── Whole documents ─────────────────────────────────────────────────

/// Normalize a raw status document into a poll snapshot, stamped now.
pub fn poll_result_from_status(raw: &RawStatus) -> PollResult {
    PollResult {
        identity: identity_from_agent(&raw.agent),
        readings: dedupe_by_id(
            "sensor",
            raw.sensors.iter().filter_map(reading_from_entry),
            |r| &r.id,
        ),
        binary_inputs: dedupe_by_id(
            "binary_input",
            raw.binary_inputs.iter().filter_map(binary_input_from_entry),
            |b| &b.id,
        ),
        outputs: dedupe_by_id(
            "output",
            raw.outputs.iter().filter_map(output_from_entry),
            |o| &o.id,
        ),
        polled_at: Utc::now(),
    }
}

/// Enforce id uniqueness within one record sequence; first occurrence wins.
fn dedupe_by_id<T>(
    kind: &str,
    records: impl Iterator<Item = T>,
    id_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        if seen.insert(id_of(&record).to_string()) {
            unique.push(record);
        } else {
            debug!(kind, id = id_of(&record), "duplicate record id, first kept");
        }
    }
    unique
}
