// ── Sensor reading domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category, inferred from the free-text unit. Drives how an
/// embedding application pictures and aggregates a reading; it never feeds
/// back into parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SensorCategory {
    Temperature,
    Humidity,
    Voltage,
    Current,
    /// GSM signal strength; only ever assigned to derived modem readings.
    Signal,
    /// Anything the unit text does not identify.
    Generic,
}

impl SensorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Signal => "signal",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for SensorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reading value: numeric when the device text parses as a float,
/// otherwise the text verbatim. Sensors in fault states report strings like
/// `"-"` or `"Err"`, and dropping those would hide exactly the readings an
/// operator most wants to see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Number(f64),
    Text(String),
}

impl ReadingValue {
    /// Parse device text into a value. Never fails; unparseable text is
    /// carried through as [`ReadingValue::Text`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One normalized sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Device-assigned identifier, unique within one poll.
    pub id: String,
    pub name: String,
    pub value: ReadingValue,
    /// Unit text as reported; empty when the device sent none.
    pub unit: String,
    /// Raw alarm/state code; `"0"` when the device sent none.
    pub state: String,
    pub category: SensorCategory,
}
