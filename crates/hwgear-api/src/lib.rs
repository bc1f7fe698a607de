// hwgear-api: async wire-level client for HW group monitoring appliances
// (Poseidon environmental units and HWg-SMS gateways).

pub mod client;
pub mod error;
pub mod status;
pub mod transport;
pub mod xml;

pub use client::{DeviceClient, RESULT_OK_MARKER, command_accepted};
pub use error::Error;
pub use status::{
    RawAgent, RawEntry, RawModemStatus, RawStatus, parse_modem_status, parse_status,
};
pub use transport::{DEFAULT_TIMEOUT, TransportConfig};
