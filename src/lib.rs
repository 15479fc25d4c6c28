//! linien-card: A compact transit-departure card for home-automation
//! dashboards.
//!
//! The card reads up to seven departure sensors from a host-provided state
//! store, sorts them by time to departure, and renders a compact HTML list
//! view; a companion configuration editor binds sensors to the seven slots.
//! Both are pure functions of the data and configuration handed to them —
//! the host triggers a re-render on every state change.

pub mod editor;
pub mod settings;

// Re-export the crate layers under their concern names
pub use linien_card_core as core;
pub use linien_card_render as render;
pub use linien_card_types as types;

// Re-export the types most hosts touch
pub use editor::ConfigEditor;
pub use linien_card_core::{
    collect_departures, global_registry, register_builtin, DepartureCard, StateStore, CARD_SIZE,
    CARD_TYPE,
};
pub use linien_card_render::{escape_html, render_card, render_departure_list, render_editor};
pub use linien_card_types::{
    CardConfig, CardError, CardInfo, Departure, DepartureListView, EditorView, SensorReading,
    SensorState, Slot, StateSnapshot,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Full pipeline: host snapshot in, card markup out.
    #[test]
    fn test_snapshot_to_markup() {
        let snapshot: StateSnapshot = serde_json::from_str(
            r#"{
                "sensor.transit_departure_1": {
                    "state": "2",
                    "attributes": {
                        "line": "4",
                        "destination": "Jakominiplatz",
                        "is_delayed": true
                    }
                },
                "sensor.transit_departure_3": {
                    "state": "5",
                    "attributes": {"line": "6", "destination": "Hauptplatz"}
                },
                "sensor.transit_departure_2": {"state": "unavailable"}
            }"#,
        )
        .unwrap();

        let mut card = DepartureCard::new();
        card.set_config(Some(DepartureCard::stub_config())).unwrap();

        let view = card.update(&snapshot);
        assert_eq!(view.row_count(), 2);

        let html = render_card(view);
        let first = html.find("Jakominiplatz").unwrap();
        let second = html.find("Hauptplatz").unwrap();
        assert!(first < second);
        assert!(html.contains("VERSPÄTET"));
    }

    /// Editor edits feed straight back into the selector.
    #[test]
    fn test_editor_roundtrip_into_card() {
        let mut snapshot = StateSnapshot::new();
        snapshot.insert(
            "sensor.foo",
            SensorReading::new("1").with_attr("line", "X"),
        );

        let mut editor = ConfigEditor::new(CardConfig::new());
        editor.set_slot(Slot::new(4).unwrap(), "sensor.foo");

        let mut card = DepartureCard::new();
        card.set_config(Some(editor.config().clone())).unwrap();
        assert_eq!(card.update(&snapshot).row_count(), 1);
    }
}
