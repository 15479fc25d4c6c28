//! Configuration editor: holds the in-memory configuration and notifies the
//! host on every edit.

use linien_card_types::{CardConfig, EditorView, Slot};
use log::debug;

/// Host callback invoked with the full updated configuration after each
/// edit. The host persists it and pushes it back to the card.
pub type ChangeHandler = Box<dyn FnMut(&CardConfig)>;

/// The card's configuration editor.
///
/// The held configuration is replaced, never mutated in place: each edit
/// produces a new version via [`CardConfig::with_sensor`], so references to
/// an earlier version keep observing it. One change notification is emitted
/// per edit, without debouncing.
#[derive(Default)]
pub struct ConfigEditor {
    config: CardConfig,
    on_change: Option<ChangeHandler>,
}

impl ConfigEditor {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            on_change: None,
        }
    }

    /// Replace the edited configuration, e.g. when the host re-opens the
    /// editor with a persisted one. Does not notify.
    pub fn set_config(&mut self, config: CardConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Register the host's change callback.
    pub fn set_on_change(&mut self, handler: impl FnMut(&CardConfig) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// The current form view: one pre-filled field per slot.
    pub fn view(&self) -> EditorView {
        EditorView::for_config(&self.config)
    }

    /// Apply one edit: bind `slot` to `sensor_id`, then notify the host
    /// with the full updated configuration.
    pub fn set_slot(&mut self, slot: Slot, sensor_id: impl Into<String>) {
        let sensor_id = sensor_id.into();
        debug!("slot {slot} edited to {sensor_id:?}");
        self.config = self.config.with_sensor(slot, sensor_id);
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slot(number: u8) -> Slot {
        Slot::new(number).unwrap()
    }

    #[test]
    fn test_edit_merges_and_notifies_full_config() {
        let mut editor = ConfigEditor::new(CardConfig::stub());

        let seen: Rc<RefCell<Vec<CardConfig>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        editor.set_on_change(move |config| sink.borrow_mut().push(config.clone()));

        editor.set_slot(slot(4), "sensor.foo");

        let emitted = seen.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].sensor_for_slot(slot(4)), "sensor.foo");
        // All other slots keep their prior values.
        for n in [1, 2, 3, 5, 6, 7] {
            assert_eq!(
                emitted[0].sensor_for_slot(slot(n)),
                format!("sensor.transit_departure_{n}")
            );
        }
    }

    #[test]
    fn test_one_notification_per_edit() {
        let mut editor = ConfigEditor::new(CardConfig::new());

        let count = Rc::new(RefCell::new(0usize));
        let sink = count.clone();
        editor.set_on_change(move |_| *sink.borrow_mut() += 1);

        editor.set_slot(slot(1), "a");
        editor.set_slot(slot(1), "ab");
        editor.set_slot(slot(1), "abc");
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_stale_references_observe_old_version() {
        let mut editor = ConfigEditor::new(CardConfig::new());
        let before = editor.config().clone();

        editor.set_slot(slot(2), "sensor.bar");

        assert_eq!(before.sensor_for_slot(slot(2)), "sensor.transit_departure_2");
        assert_eq!(editor.config().sensor_for_slot(slot(2)), "sensor.bar");
    }

    #[test]
    fn test_any_string_is_accepted() {
        let mut editor = ConfigEditor::new(CardConfig::new());
        editor.set_slot(slot(3), "not an entity id at all");
        assert_eq!(
            editor.config().sensor_for_slot(slot(3)),
            "not an entity id at all"
        );
    }

    #[test]
    fn test_view_reflects_edits() {
        let mut editor = ConfigEditor::new(CardConfig::new());
        editor.set_slot(slot(5), "sensor.baz");

        let view = editor.view();
        assert_eq!(view.fields[4].value, "sensor.baz");
        assert_eq!(view.fields[0].value, "sensor.transit_departure_1");
    }
}
