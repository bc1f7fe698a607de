// ── Binary input and relay output domain types ──

use serde::{Deserialize, Serialize};

/// Kind marker carried by every binary input. Current firmware only ever
/// reports dry contacts; the enum leaves room for alarm-typed inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum BinaryInputKind {
    #[default]
    Contact,
}

/// A dry contact input (door switch, leak probe, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryInput {
    /// Device-assigned identifier, unique within one poll.
    pub id: String,
    pub name: String,
    /// Normalized closed/active flag.
    pub state: bool,
    /// Raw alarm code; `"0"` when the device sent none.
    pub alarm_state: String,
    pub kind: BinaryInputKind,
}

/// A controllable relay output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayOutput {
    /// Device-assigned identifier, unique within one poll. Also the id to
    /// pass when switching the relay.
    pub id: String,
    pub name: String,
    /// Normalized energized flag.
    pub state: bool,
}
