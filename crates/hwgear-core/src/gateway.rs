// ── Derived modem readings ──
//
// SMS gateways publish modem state on a secondary page. The compound
// signal field is split into strength and quality; operator, registration
// and the SMS counters pass through as plain readings. Every field is
// independent: a layout mismatch drops that one reading with a debug line
// and never disturbs the primary poll.

use tracing::debug;

use hwgear_api::RawModemStatus;

use crate::model::{Reading, ReadingValue, SensorCategory};

/// Leading numeric token before the `dBm` marker:
/// `"-75 dBm (61 %)"` yields `-75.0`.
fn parse_signal_strength(raw: &str) -> Option<f64> {
    let (head, _) = raw.split_once("dBm")?;
    head.trim().parse().ok()
}

/// Percentage between the parenthesis and the percent marker:
/// `"-75 dBm (61 %)"` yields `61.0`. Both markers must be present.
fn parse_signal_quality(raw: &str) -> Option<f64> {
    let (_, tail) = raw.split_once('(')?;
    let (token, _) = tail.split_once('%')?;
    token.trim().parse().ok()
}

/// Build the derived readings for one modem status, in a fixed order:
/// signal strength, signal quality, network operator, network status,
/// SMS sent, SMS errors. Fields that are absent or in an unexpected
/// layout are simply omitted.
pub fn derive_modem_readings(modem: &RawModemStatus) -> Vec<Reading> {
    let mut readings = Vec::new();

    if let Some(signal) = modem.signal.as_deref() {
        // Quality is only trusted inside a dBm-shaped field; a percentage
        // in some other layout is not comparable.
        if signal.contains("dBm") {
            if let Some(strength) = parse_signal_strength(signal) {
                readings.push(derived(
                    "signal_strength",
                    "Signal Strength",
                    ReadingValue::Number(strength),
                    "dBm",
                    SensorCategory::Signal,
                ));
            }
            if let Some(quality) = parse_signal_quality(signal) {
                readings.push(derived(
                    "signal_quality",
                    "Signal Quality",
                    ReadingValue::Number(quality),
                    "%",
                    SensorCategory::Generic,
                ));
            }
        } else {
            debug!(signal, "modem signal field in unexpected layout, skipped");
        }
    }

    if let Some(operator) = trimmed(modem.operator.as_deref()) {
        readings.push(derived(
            "network_operator",
            "Network Operator",
            ReadingValue::Text(operator),
            "",
            SensorCategory::Generic,
        ));
    }

    if let Some(registration) = trimmed(modem.registration.as_deref()) {
        readings.push(derived(
            "network_status",
            "Network Status",
            ReadingValue::Text(registration),
            "",
            SensorCategory::Generic,
        ));
    }

    push_counter(&mut readings, "sms_sent", "SMS Sent", modem.sms_sent.as_deref());
    push_counter(
        &mut readings,
        "sms_errors",
        "SMS Errors",
        modem.sms_errors.as_deref(),
    );

    readings
}

/// Pass-through for free-text fields; blank text is no reading.
fn trimmed(raw: Option<&str>) -> Option<String> {
    let text = raw?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Counters must be integers; anything else is dropped.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn push_counter(readings: &mut Vec<Reading>, id: &str, name: &str, raw: Option<&str>) {
    let Some(raw) = raw else { return };
    match raw.trim().parse::<i64>() {
        Ok(count) => readings.push(derived(
            id,
            name,
            ReadingValue::Number(count as f64),
            "",
            SensorCategory::Generic,
        )),
        Err(_) => debug!(counter = id, value = raw, "unparseable modem counter, skipped"),
    }
}

fn derived(
    id: &str,
    name: &str,
    value: ReadingValue,
    unit: &str,
    category: SensorCategory,
) -> Reading {
    Reading {
        id: id.to_string(),
        name: name.to_string(),
        value,
        unit: unit.to_string(),
        state: "0".to_string(),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modem(signal: Option<&str>) -> RawModemStatus {
        RawModemStatus {
            signal: signal.map(ToOwned::to_owned),
            ..RawModemStatus::default()
        }
    }

    #[test]
    fn full_status_derives_all_six_readings() {
        let status = RawModemStatus {
            signal: Some("-75 dBm (61 %)".to_string()),
            operator: Some("Vodafone CZ".to_string()),
            registration: Some("Registered (home)".to_string()),
            sms_sent: Some("42".to_string()),
            sms_errors: Some("3".to_string()),
        };
        let readings = derive_modem_readings(&status);
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "signal_strength",
                "signal_quality",
                "network_operator",
                "network_status",
                "sms_sent",
                "sms_errors"
            ]
        );

        assert_eq!(readings[0].value, ReadingValue::Number(-75.0));
        assert_eq!(readings[0].unit, "dBm");
        assert_eq!(readings[0].category, SensorCategory::Signal);
        assert_eq!(readings[1].value, ReadingValue::Number(61.0));
        assert_eq!(readings[1].unit, "%");
        assert_eq!(
            readings[2].value,
            ReadingValue::Text("Vodafone CZ".to_string())
        );
        assert_eq!(readings[4].value, ReadingValue::Number(42.0));
        assert_eq!(readings[5].value, ReadingValue::Number(3.0));
    }

    #[test]
    fn signal_without_dbm_marker_is_skipped() {
        let readings = derive_modem_readings(&modem(Some("excellent (90 %)")));
        assert!(readings.is_empty());
    }

    #[test]
    fn strength_without_quality_section() {
        let readings = derive_modem_readings(&modem(Some("-82 dBm")));
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["signal_strength"]);
        assert_eq!(readings[0].value, ReadingValue::Number(-82.0));
    }

    #[test]
    fn unparseable_strength_still_yields_quality() {
        let readings = derive_modem_readings(&modem(Some("weak dBm (12 %)")));
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["signal_quality"]);
    }

    #[test]
    fn quality_requires_both_markers() {
        let readings = derive_modem_readings(&modem(Some("-75 dBm (61")));
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["signal_strength"]);
    }

    #[test]
    fn blank_operator_is_omitted() {
        let status = RawModemStatus {
            operator: Some("   ".to_string()),
            registration: Some("Roaming".to_string()),
            ..RawModemStatus::default()
        };
        let readings = derive_modem_readings(&status);
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["network_status"]);
    }

    #[test]
    fn non_integer_counter_is_omitted() {
        let status = RawModemStatus {
            sms_sent: Some("lots".to_string()),
            sms_errors: Some("0".to_string()),
            ..RawModemStatus::default()
        };
        let readings = derive_modem_readings(&status);
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["sms_errors"]);
        assert_eq!(readings[0].value, ReadingValue::Number(0.0));
    }

    #[test]
    fn empty_status_derives_nothing() {
        assert!(derive_modem_readings(&RawModemStatus::default()).is_empty());
    }
}
