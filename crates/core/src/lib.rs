//! linien-card-core: Core logic for the linien-card departure card.
//!
//! This crate contains the departure selection pipeline, the card itself,
//! the host state-store seam, and the card registry.

mod card;
mod registry;
mod selector;
mod store;

pub use card::{DepartureCard, CARD_SIZE, CARD_TYPE};
pub use registry::{global_registry, register_builtin, CardRegistry};
pub use selector::{collect_departures, departure_for_slot, parse_minutes};
pub use store::StateStore;

// Re-export types used in public signatures for convenience
pub use linien_card_types::{
    CardConfig, CardError, CardInfo, Departure, DepartureListView, Slot, StateSnapshot,
};
