// ── Heuristic classifiers ──
//
// The devices report neither a family code nor a sensor kind, only free
// text. Both classifiers are ordered rule tables over lowercased text, so
// supporting a new model or unit spelling is a data edit, not new control
// flow.

use tracing::warn;

use crate::model::{DeviceFamily, SensorCategory};

/// Substring markers matched against the lowercased model text, first hit
/// wins. Gateway markers come first: gateway titles sometimes carry a model
/// number too, and the gateway behavior (secondary poll, SMS commands) is
/// what must not be missed.
const FAMILY_RULES: &[(&[&str], DeviceFamily)] = &[
    (&["hwg-sms", "sms", "gateway"], DeviceFamily::SmsGateway),
    (&["3268"], DeviceFamily::Poseidon3268),
    (&["3266"], DeviceFamily::Poseidon3266),
];

/// Infer the hardware family from the model text.
pub fn infer_family(model: &str) -> DeviceFamily {
    let lower = model.to_lowercase();
    for (markers, family) in FAMILY_RULES {
        if markers.iter().any(|marker| lower.contains(marker)) {
            return *family;
        }
    }
    warn!(
        model,
        "unknown device model, assuming {}",
        DeviceFamily::FALLBACK
    );
    DeviceFamily::FALLBACK
}

struct UnitRule {
    category: SensorCategory,
    /// Tokens the whole unit must equal (short units like `C` or `V` would
    /// otherwise collide as substrings).
    equals: &'static [&'static str],
    /// Tokens that may appear anywhere in the unit.
    contains: &'static [&'static str],
}

const UNIT_RULES: &[UnitRule] = &[
    UnitRule {
        category: SensorCategory::Temperature,
        equals: &["c", "f"],
        contains: &["\u{b0}c", "celsius", "\u{b0}f"],
    },
    UnitRule {
        category: SensorCategory::Humidity,
        equals: &[],
        contains: &["%", "rh"],
    },
    UnitRule {
        category: SensorCategory::Voltage,
        equals: &["v"],
        contains: &["volt"],
    },
    UnitRule {
        category: SensorCategory::Current,
        equals: &["a"],
        contains: &["amp", "ma"],
    },
];

/// Classify a unit string into a sensor category. Unknown units are
/// [`SensorCategory::Generic`], never an error.
pub fn classify_unit(unit: &str) -> SensorCategory {
    let lower = unit.trim().to_lowercase();
    for rule in UNIT_RULES {
        if rule.equals.iter().any(|token| lower == *token)
            || rule.contains.iter().any(|token| lower.contains(token))
        {
            return rule.category;
        }
    }
    SensorCategory::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_markers_case_insensitive() {
        assert_eq!(infer_family("Poseidon2 3268"), DeviceFamily::Poseidon3268);
        assert_eq!(infer_family("POSEIDON2 3266"), DeviceFamily::Poseidon3266);
        assert_eq!(infer_family("HWg-SMS-GW3"), DeviceFamily::SmsGateway);
        assert_eq!(infer_family("SMS Gateway"), DeviceFamily::SmsGateway);
        assert_eq!(infer_family("Acme gateway mk2"), DeviceFamily::SmsGateway);
    }

    #[test]
    fn family_markers_match_as_substrings() {
        assert_eq!(infer_family("unit 3268 rev B"), DeviceFamily::Poseidon3268);
    }

    #[test]
    fn gateway_markers_outrank_model_numbers() {
        assert_eq!(infer_family("SMS-GW 3268"), DeviceFamily::SmsGateway);
    }

    #[test]
    fn unknown_model_falls_back() {
        assert_eq!(infer_family("Damocles 2404"), DeviceFamily::FALLBACK);
        assert_eq!(infer_family(""), DeviceFamily::FALLBACK);
    }

    #[test]
    fn temperature_units() {
        assert_eq!(classify_unit("C"), SensorCategory::Temperature);
        assert_eq!(classify_unit("\u{b0}C"), SensorCategory::Temperature);
        assert_eq!(classify_unit("Celsius"), SensorCategory::Temperature);
        assert_eq!(classify_unit("\u{b0}F"), SensorCategory::Temperature);
        assert_eq!(classify_unit("F"), SensorCategory::Temperature);
    }

    #[test]
    fn humidity_units() {
        assert_eq!(classify_unit("%RH"), SensorCategory::Humidity);
        assert_eq!(classify_unit("%"), SensorCategory::Humidity);
        assert_eq!(classify_unit("rh"), SensorCategory::Humidity);
    }

    #[test]
    fn electrical_units() {
        assert_eq!(classify_unit("V"), SensorCategory::Voltage);
        assert_eq!(classify_unit("Volt"), SensorCategory::Voltage);
        assert_eq!(classify_unit("A"), SensorCategory::Current);
        assert_eq!(classify_unit("mA"), SensorCategory::Current);
        assert_eq!(classify_unit("Amp"), SensorCategory::Current);
    }

    #[test]
    fn short_tokens_do_not_match_as_substrings() {
        // "Pascal" contains an "a" but is not a current sensor.
        assert_eq!(classify_unit("Pascal"), SensorCategory::Generic);
        assert_eq!(classify_unit("lux"), SensorCategory::Generic);
        assert_eq!(classify_unit(""), SensorCategory::Generic);
    }
}
