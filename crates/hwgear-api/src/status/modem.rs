// Secondary status document for SMS gateways.
//
// Gateways expose a second page with GSM modem state: a compound signal
// field, network operator and registration text, and lifetime SMS counters.
// Every field is optional; the reader passes the raw text through and the
// core crate decides what becomes a reading.

use crate::error::Error;
use crate::xml::Element;

/// Modem fields as the gateway wrote them, all optional and unparsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawModemStatus {
    /// Compound signal field, typically `"-75 dBm (61 %)"`.
    pub signal: Option<String>,
    pub operator: Option<String>,
    pub registration: Option<String>,
    pub sms_sent: Option<String>,
    pub sms_errors: Option<String>,
}

/// Parse a gateway status document. `Err` only for XML the reader rejects;
/// a document without modem fields yields an all-`None` status.
pub fn parse_modem_status(body: &str) -> Result<RawModemStatus, Error> {
    let root = Element::parse(body)?;
    Ok(RawModemStatus {
        signal: root.descendant_text("ModemSigQ"),
        operator: root.descendant_text("ModemNetOp"),
        registration: root.descendant_text("ModemNetReg"),
        sms_sent: root.descendant_text("CntSmsOK"),
        sms_errors: root.descendant_text("CntSmsError"),
    })
}
