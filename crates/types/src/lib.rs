//! linien-card-types: Shared data types for the linien-card departure card.
//!
//! This crate contains pure data types (configuration, state snapshots,
//! derived departures, registration metadata) that are shared across all
//! linien-card crates. These types have no rendering dependencies, making
//! them suitable as a foundation layer.

pub mod card_info;
pub mod config;
pub mod departure;
pub mod editor;
pub mod error;
pub mod state;

// Re-export commonly used types at the crate root for convenience
pub use card_info::CardInfo;
pub use config::{default_sensor_id, CardConfig, Slot, SLOT_COUNT};
pub use departure::{Departure, DepartureListView, DepartureStatus};
pub use editor::{EditorField, EditorView};
pub use error::CardError;
pub use state::{SensorReading, SensorState, StateSnapshot};
