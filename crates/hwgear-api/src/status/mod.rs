// Status document parsing.
//
// Two markup dialects are in the field. Newer Poseidon and HWg-SMS firmware
// writes CamelCase elements with the data in child elements (an `Agent`
// block plus `SenSet` / `BinaryInSet` / `OutputSet` groups of `Entry`
// records). Older units write lowercase elements and carry identity in
// attributes, with only the volatile leaf values (`value`, `state`, `unit`)
// as child elements. Each dialect gets one reader; a fixed-order probe table
// decides which one runs. A document matching neither shape is not an error,
// it yields an empty status.

pub mod attribute;
pub mod element;
pub mod modem;

use tracing::debug;

use crate::error::Error;
use crate::xml::Element;

pub use modem::{RawModemStatus, parse_modem_status};

/// One sensor, binary input, or output record as the device wrote it.
/// Everything is optional here; the conversion layer decides what a record
/// must carry to be usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub unit: Option<String>,
    pub state: Option<String>,
}

/// Device identity block as the device wrote it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAgent {
    pub name: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
    pub serial: Option<String>,
}

/// Everything extracted from one values document, pre-normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStatus {
    pub agent: RawAgent,
    pub sensors: Vec<RawEntry>,
    pub binary_inputs: Vec<RawEntry>,
    pub outputs: Vec<RawEntry>,
}

impl RawStatus {
    /// True when nothing at all was recognized in the document.
    pub fn is_empty(&self) -> bool {
        self.agent == RawAgent::default()
            && self.sensors.is_empty()
            && self.binary_inputs.is_empty()
            && self.outputs.is_empty()
    }
}

struct Dialect {
    name: &'static str,
    matches: fn(&Element) -> bool,
    read: fn(&Element) -> RawStatus,
}

// Probe order is part of the contract: the element dialect is checked first
// because its `Entry` records would also satisfy a loose entry probe.
const DIALECTS: [Dialect; 2] = [
    Dialect {
        name: "element",
        matches: element::matches,
        read: element::read,
    },
    Dialect {
        name: "attribute",
        matches: attribute::matches,
        read: attribute::read,
    },
];

/// Parse a values document into its raw form.
///
/// Returns `Err` only for XML the reader rejects outright. A well-formed
/// document that matches no known dialect yields [`RawStatus::default`].
pub fn parse_status(body: &str) -> Result<RawStatus, Error> {
    let root = Element::parse(body)?;
    for dialect in &DIALECTS {
        if (dialect.matches)(&root) {
            debug!(dialect = dialect.name, "status dialect matched");
            return Ok((dialect.read)(&root));
        }
    }
    debug!("status document matched no known dialect");
    Ok(RawStatus::default())
}
