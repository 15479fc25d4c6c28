//! HTML rendering of the departure list view.

use crate::escape::escape_html;
use crate::style::CARD_STYLE;
use linien_card_types::{Departure, DepartureListView, DepartureStatus};

/// Fixed empty-state text.
pub const NO_DEPARTURES_TEXT: &str = "Keine Abfahrten verfügbar";

/// Status label literal for a departure status.
pub fn status_label(status: DepartureStatus) -> &'static str {
    match status {
        DepartureStatus::Delayed => "VERSPÄTET",
        DepartureStatus::Scheduled => "FAHRPLAN",
    }
}

/// Stylesheet class carrying the error-like vs. warning-like treatment.
pub fn status_class(status: DepartureStatus) -> &'static str {
    match status {
        DepartureStatus::Delayed => "delayed",
        DepartureStatus::Scheduled => "scheduled",
    }
}

fn render_row(departure: &Departure) -> String {
    let (minutes_class, status_indicator) = match departure.status() {
        Some(status) => (
            format!(" {}", status_class(status)),
            format!(
                r#"<div class="status-indicator {}">{}</div>"#,
                status_class(status),
                status_label(status)
            ),
        ),
        None => (String::new(), String::new()),
    };

    format!(
        concat!(
            r#"<div class="departure-row">"#,
            r#"<div class="line-badge">{line}</div>"#,
            r#"<div class="destination">{destination}</div>"#,
            r#"<div class="time-info">"#,
            r#"<div class="minutes{minutes_class}">{minutes}<span class="minutes-label">min</span></div>"#,
            "{status_indicator}",
            "</div>",
            "</div>"
        ),
        line = escape_html(&departure.line),
        destination = escape_html(&departure.destination),
        minutes = departure.minutes_until,
        minutes_class = minutes_class,
        status_indicator = status_indicator,
    )
}

/// Render the inner departure list: one row per departure in the order the
/// view model carries, or the fixed empty-state text.
pub fn render_departure_list(view: &DepartureListView) -> String {
    if view.is_empty() {
        return format!(r#"<div class="no-departures">{NO_DEPARTURES_TEXT}</div>"#);
    }

    view.departures()
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full card: shell, departure list, and embedded stylesheet.
pub fn render_card(view: &DepartureListView) -> String {
    format!(
        concat!(
            "<ha-card>\n",
            "  <div class=\"card-content\">\n",
            "    <div class=\"departures-container\">\n",
            "{list}\n",
            "    </div>\n",
            "  </div>\n",
            "</ha-card>\n",
            "<style>{style}</style>\n"
        ),
        list = render_departure_list(view),
        style = CARD_STYLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use linien_card_types::Slot;

    fn departure(line: &str, destination: &str, minutes: i32, slot: u8) -> Departure {
        Departure {
            line: line.to_string(),
            destination: destination.to_string(),
            minutes_until: minutes,
            departure_time: String::new(),
            is_delayed: false,
            is_scheduled: false,
            source_slot: Slot::new(slot).unwrap(),
        }
    }

    #[test]
    fn test_empty_view_renders_no_departures_text() {
        let html = render_departure_list(&DepartureListView::Empty);
        assert_eq!(
            html,
            r#"<div class="no-departures">Keine Abfahrten verfügbar</div>"#
        );
    }

    #[test]
    fn test_rows_follow_view_order() {
        let view = DepartureListView::from_departures(vec![
            departure("4", "Jakominiplatz", 2, 1),
            departure("6", "Hauptplatz", 5, 3),
        ]);
        let html = render_departure_list(&view);

        let first = html.find("Jakominiplatz").unwrap();
        let second = html.find("Hauptplatz").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("departure-row").count(), 2);
        assert!(html.contains(r#"2<span class="minutes-label">min</span>"#));
        assert!(html.contains(r#"5<span class="minutes-label">min</span>"#));
    }

    #[test]
    fn test_status_indicator_only_when_flagged() {
        let plain = DepartureListView::from_departures(vec![departure("4", "X", 2, 1)]);
        assert!(!render_departure_list(&plain).contains("status-indicator"));

        let mut delayed = departure("4", "X", 2, 1);
        delayed.is_delayed = true;
        let html = render_departure_list(&DepartureListView::from_departures(vec![delayed]));
        assert!(html.contains(r#"<div class="minutes delayed">"#));
        assert!(html.contains(r#"<div class="status-indicator delayed">VERSPÄTET</div>"#));

        let mut scheduled = departure("4", "X", 2, 1);
        scheduled.is_scheduled = true;
        let html = render_departure_list(&DepartureListView::from_departures(vec![scheduled]));
        assert!(html.contains(r#"<div class="status-indicator scheduled">FAHRPLAN</div>"#));
    }

    #[test]
    fn test_delayed_wins_over_scheduled_in_markup() {
        let mut both = departure("4", "X", 2, 1);
        both.is_delayed = true;
        both.is_scheduled = true;
        let html = render_departure_list(&DepartureListView::from_departures(vec![both]));
        assert!(html.contains("VERSPÄTET"));
        assert!(!html.contains("FAHRPLAN"));
    }

    #[test]
    fn test_sensor_text_is_escaped() {
        let view = DepartureListView::from_departures(vec![departure(
            "<script>alert(1)</script>",
            "<b>Ort</b>",
            1,
            1,
        )]);
        let html = render_departure_list(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;Ort&lt;/b&gt;"));
    }

    #[test]
    fn test_card_shell_wraps_list_and_style() {
        let html = render_card(&DepartureListView::Empty);
        assert!(html.starts_with("<ha-card>"));
        assert!(html.contains("departures-container"));
        assert!(html.contains(NO_DEPARTURES_TEXT));
        assert!(html.contains("<style>"));
        assert!(html.contains("text-overflow: ellipsis"));
    }
}
