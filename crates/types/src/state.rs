//! Host-supplied sensor state: availability plus a dynamic attribute bag.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Availability state reported by a sensor, distinct from its attributes.
///
/// Anything other than the two reserved markers is a live value, normally a
/// numeric minutes-until-departure string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensorState {
    Unavailable,
    Unknown,
    Value(String),
}

impl SensorState {
    /// Whether the reading carries a usable value.
    pub fn is_available(&self) -> bool {
        matches!(self, SensorState::Value(_))
    }

    /// The raw state string of an available reading.
    pub fn value(&self) -> Option<&str> {
        match self {
            SensorState::Value(raw) => Some(raw),
            _ => None,
        }
    }
}

impl From<String> for SensorState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "unavailable" => SensorState::Unavailable,
            "unknown" => SensorState::Unknown,
            _ => SensorState::Value(raw),
        }
    }
}

impl From<SensorState> for String {
    fn from(state: SensorState) -> Self {
        match state {
            SensorState::Unavailable => "unavailable".to_string(),
            SensorState::Unknown => "unknown".to_string(),
            SensorState::Value(raw) => raw,
        }
    }
}

/// The host's view of one sensor: availability state plus attributes.
///
/// The attribute bag is dynamic. Accessors validate defensively and fall
/// back to documented defaults instead of assuming fields are present or
/// well-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub state: SensorState,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl SensorReading {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: SensorState::from(state.into()),
            attributes: HashMap::new(),
        }
    }

    /// Builder-style attribute setter, mainly for hosts and tests.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    fn attr_bool(&self, key: &str) -> bool {
        self.attributes
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Transit line identifier. Required for the reading to be usable;
    /// empty values count as missing.
    pub fn line(&self) -> Option<&str> {
        self.attr_str("line").filter(|line| !line.is_empty())
    }

    /// Destination, defaulting to `"Unknown"` when absent or empty.
    pub fn destination(&self) -> &str {
        self.attr_str("destination")
            .filter(|dest| !dest.is_empty())
            .unwrap_or("Unknown")
    }

    /// Scheduled departure time string, defaulting to `""`. Never used for
    /// sorting.
    pub fn departure_time(&self) -> &str {
        self.attr_str("departure_time").unwrap_or("")
    }

    pub fn is_delayed(&self) -> bool {
        self.attr_bool("is_delayed")
    }

    pub fn is_scheduled(&self) -> bool {
        self.attr_bool("is_scheduled")
    }
}

/// The host's current mapping of all sensor identifiers to live readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    readings: HashMap<String, SensorReading>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, reading: SensorReading) {
        self.readings.insert(entity_id.into(), reading);
    }

    pub fn get(&self, entity_id: &str) -> Option<&SensorReading> {
        self.readings.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
