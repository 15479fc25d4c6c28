//! Derived departure records and the list view model.

use crate::config::Slot;

/// Status flag of a departure, shown only when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureStatus {
    Delayed,
    Scheduled,
}

/// One upcoming transit departure, derived from a sensor reading during a
/// render pass.
///
/// Ephemeral by contract: recomputed from scratch on every update and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub line: String,
    pub destination: String,
    pub minutes_until: i32,
    /// Raw departure time string from the sensor. Carried along for hosts
    /// that want it; the list view neither sorts nor displays by it.
    pub departure_time: String,
    pub is_delayed: bool,
    pub is_scheduled: bool,
    /// Slot the departure was read from; preserves configured order on ties.
    pub source_slot: Slot,
}

impl Departure {
    /// Status label to show, if any.
    ///
    /// Delayed takes precedence over scheduled when both flags are set.
    pub fn status(&self) -> Option<DepartureStatus> {
        if self.is_delayed {
            Some(DepartureStatus::Delayed)
        } else if self.is_scheduled {
            Some(DepartureStatus::Scheduled)
        } else {
            None
        }
    }
}

/// View model handed to the rendering layer: the empty state or the sorted
/// departure rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DepartureListView {
    #[default]
    Empty,
    Departures(Vec<Departure>),
}

impl DepartureListView {
    /// Wraps a sorted departure list, collapsing an empty list into the
    /// dedicated empty state.
    pub fn from_departures(departures: Vec<Departure>) -> Self {
        if departures.is_empty() {
            Self::Empty
        } else {
            Self::Departures(departures)
        }
    }

    pub fn departures(&self) -> &[Departure] {
        match self {
            Self::Empty => &[],
            Self::Departures(departures) => departures,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of rows the rendered list will have.
    pub fn row_count(&self) -> usize {
        self.departures().len()
    }
}
