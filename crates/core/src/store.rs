//! The host state-store seam.

use linien_card_types::{SensorReading, StateSnapshot};

/// Read access to the host's live sensor readings.
///
/// The card only ever looks readings up by sensor identifier, so hosts with
/// richer state stores implement this over whatever they keep internally.
/// The plain [`StateSnapshot`] mapping is the reference implementation.
pub trait StateStore {
    fn reading(&self, entity_id: &str) -> Option<&SensorReading>;
}

impl StateStore for StateSnapshot {
    fn reading(&self, entity_id: &str) -> Option<&SensorReading> {
        self.get(entity_id)
    }
}
