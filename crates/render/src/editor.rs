//! HTML rendering of the configuration editor form.

use crate::escape::escape_html;
use crate::style::EDITOR_STYLE;
use linien_card_types::EditorView;

pub const EDITOR_TITLE: &str = "Linien Card Configuration";
pub const EDITOR_HINT: &str = "Configure the sensor entities for each departure (optional)";

/// Render the editor form: a header plus one labeled text input per slot,
/// pre-filled from the view model.
pub fn render_editor(view: &EditorView) -> String {
    let rows = view
        .fields
        .iter()
        .map(|field| {
            format!(
                concat!(
                    r#"<div class="config-row">"#,
                    r#"<label for="sensor_{slot}">{label}:</label>"#,
                    r#"<input type="text" id="sensor_{slot}" value="{value}" placeholder="{placeholder}"/>"#,
                    "</div>"
                ),
                slot = field.slot,
                label = escape_html(&field.label),
                value = escape_html(&field.value),
                placeholder = escape_html(&field.placeholder),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        concat!(
            "<div class=\"card-config\">\n",
            "<div class=\"config-header\"><h3>{title}</h3><p>{hint}</p></div>\n",
            "{rows}\n",
            "</div>\n",
            "<style>{style}</style>\n"
        ),
        title = EDITOR_TITLE,
        hint = EDITOR_HINT,
        rows = rows,
        style = EDITOR_STYLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use linien_card_types::{CardConfig, Slot};

    #[test]
    fn test_renders_one_input_per_slot() {
        let view = EditorView::for_config(&CardConfig::new());
        let html = render_editor(&view);
        for n in 1..=7 {
            assert!(html.contains(&format!(r#"id="sensor_{n}""#)));
            assert!(html.contains(&format!(
                r#"placeholder="sensor.transit_departure_{n}""#
            )));
        }
        assert!(html.contains(EDITOR_TITLE));
    }

    #[test]
    fn test_configured_value_is_prefilled_and_escaped() {
        let config = CardConfig::new().with_sensor(Slot::new(2).unwrap(), r#"sensor."quoted""#);
        let html = render_editor(&EditorView::for_config(&config));
        assert!(html.contains(r#"value="sensor.&quot;quoted&quot;""#));
    }
}
