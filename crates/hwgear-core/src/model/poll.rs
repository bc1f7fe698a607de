// ── Poll snapshot ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::device::DeviceIdentity;
use super::io::{BinaryInput, RelayOutput};
use super::reading::Reading;

/// Immutable snapshot of one successful poll. Consumers diff successive
/// snapshots; nothing here mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollResult {
    pub identity: DeviceIdentity,
    /// Sensor readings, primary first, then any derived modem readings.
    pub readings: Vec<Reading>,
    pub binary_inputs: Vec<BinaryInput>,
    pub outputs: Vec<RelayOutput>,
    /// Client-clock timestamp taken when the snapshot was assembled.
    pub polled_at: DateTime<Utc>,
}

impl PollResult {
    /// Look up a reading by device-assigned id.
    pub fn reading(&self, id: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.id == id)
    }

    /// Look up a binary input by device-assigned id.
    pub fn binary_input(&self, id: &str) -> Option<&BinaryInput> {
        self.binary_inputs.iter().find(|b| b.id == id)
    }

    /// Look up a relay output by device-assigned id.
    pub fn output(&self, id: &str) -> Option<&RelayOutput> {
        self.outputs.iter().find(|o| o.id == id)
    }

    /// True when the poll produced no telemetry at all (identity alone does
    /// not count).
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty() && self.binary_inputs.is_empty() && self.outputs.is_empty()
    }
}
