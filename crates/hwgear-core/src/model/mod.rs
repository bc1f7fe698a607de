// ── Canonical telemetry model ──
//
// Every type here is the normalized representation consumers depend on.
// Whatever dialect the device spoke, whatever fields it omitted, a poll
// always produces these shapes with the same defaults.

pub mod device;
pub mod io;
pub mod poll;
pub mod reading;

// ── Re-exports ──────────────────────────────────────────────────────

pub use device::{DeviceFamily, DeviceIdentity};
pub use io::{BinaryInput, BinaryInputKind, RelayOutput};
pub use poll::PollResult;
pub use reading::{Reading, ReadingValue, SensorCategory};
