// ── Device identity domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hardware family, inferred from the free-text model every poll. The
/// devices never report a machine-readable family code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DeviceFamily {
    /// Poseidon2 3268 environmental monitoring unit.
    Poseidon3268,
    /// Poseidon2 3266 environmental monitoring unit.
    Poseidon3266,
    /// HWg-SMS gateway: GSM modem appliance with SMS and call commands
    /// and a secondary modem status document.
    SmsGateway,
}

impl DeviceFamily {
    /// Family assumed when the model text matches no known marker.
    pub const FALLBACK: Self = Self::Poseidon3268;

    /// Gateways get the secondary modem poll and accept SMS/call commands.
    pub fn is_gateway(self) -> bool {
        matches!(self, Self::SmsGateway)
    }

    /// Stable identifier for logs and serialized snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poseidon3268 => "poseidon_3268",
            Self::Poseidon3266 => "poseidon_3266",
            Self::SmsGateway => "sms_gateway",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity block of one appliance, re-derived on every poll so a firmware
/// update or device swap behind the same address is picked up immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// Display name; the configured device name when present, otherwise the
    /// model text or a generic fallback.
    pub name: String,
    /// Free-text model, e.g. `"Poseidon2 3268"` or `"HWg-SMS-GW3"`.
    pub model: String,
    pub firmware_version: String,
    pub serial: String,
    pub family: DeviceFamily,
}
