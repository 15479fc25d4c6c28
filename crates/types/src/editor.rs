//! View model for the configuration editor form.

use crate::config::{default_sensor_id, CardConfig, Slot};

/// One editable slot binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorField {
    pub slot: Slot,
    /// Label shown next to the input.
    pub label: String,
    /// Pre-filled value: the configured identifier, or the default pattern
    /// when the slot is unbound.
    pub value: String,
    /// Always the default pattern for the slot.
    pub placeholder: String,
}

/// View model of the editor form: one field per slot, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub fields: Vec<EditorField>,
}

impl EditorView {
    /// Build the form view for `config`.
    pub fn for_config(config: &CardConfig) -> Self {
        let fields = Slot::ALL
            .iter()
            .map(|&slot| {
                let placeholder = default_sensor_id(slot);
                EditorField {
                    slot,
                    label: format!("Departure {slot} Sensor"),
                    value: config
                        .explicit_sensor(slot)
                        .map(str::to_owned)
                        .unwrap_or_else(|| placeholder.clone()),
                    placeholder,
                }
            })
            .collect();
        Self { fields }
    }
}
