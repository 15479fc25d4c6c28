//! Card configuration: the slot-to-sensor mapping owned by the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Number of departure slots a card always considers.
pub const SLOT_COUNT: usize = 7;

/// Default sensor identifier for a slot.
pub fn default_sensor_id(slot: Slot) -> String {
    format!("sensor.transit_departure_{}", slot.number())
}

/// One of the seven fixed departure positions (1..=7).
///
/// Construction is validating, so slot numbers outside the valid range are
/// unrepresentable and never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// All seven slots in position order.
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot(1),
        Slot(2),
        Slot(3),
        Slot(4),
        Slot(5),
        Slot(6),
        Slot(7),
    ];

    /// Create a slot from its 1-based number, rejecting anything outside 1..=7.
    pub fn new(number: u8) -> Option<Self> {
        if (1..=SLOT_COUNT as u8).contains(&number) {
            Some(Slot(number))
        } else {
            None
        }
    }

    /// The 1-based slot number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Configuration key this slot is stored under (`sensor_1`..`sensor_7`).
    pub fn config_key(self) -> String {
        format!("sensor_{}", self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from slot to sensor identifier.
///
/// The wire format is the flat object the host persists
/// (`{"sensor_1": "sensor.foo", ...}`). It may be partial — unbound slots
/// resolve to the conventional default pattern — and any extra keys the
/// host attaches (a `type` tag, for instance) are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(flatten)]
    entries: HashMap<String, Value>,
}

impl CardConfig {
    /// An empty configuration; every slot resolves to its default sensor.
    pub fn new() -> Self {
        Self::default()
    }

    /// First-time-setup configuration with every slot explicitly bound to
    /// its default sensor.
    pub fn stub() -> Self {
        let mut entries = HashMap::new();
        for slot in Slot::ALL {
            entries.insert(slot.config_key(), Value::from(default_sensor_id(slot)));
        }
        Self { entries }
    }

    /// Sensor identifier explicitly configured for `slot`, if any.
    ///
    /// Empty values count as unset, matching how hosts treat blank editor
    /// fields.
    pub fn explicit_sensor(&self, slot: Slot) -> Option<&str> {
        self.entries
            .get(&slot.config_key())
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Sensor identifier to read for `slot`: the configured value, or the
    /// default pattern when unset.
    pub fn sensor_for_slot(&self, slot: Slot) -> String {
        self.explicit_sensor(slot)
            .map(str::to_owned)
            .unwrap_or_else(|| default_sensor_id(slot))
    }

    /// A new configuration with `slot` bound to `sensor_id`.
    ///
    /// The update is immutable: `self` is left untouched, so stale
    /// references keep observing the previous version.
    #[must_use]
    pub fn with_sensor(&self, slot: Slot, sensor_id: impl Into<String>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(slot.config_key(), Value::from(sensor_id.into()));
        Self { entries }
    }
}
