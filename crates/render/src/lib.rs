//! linien-card-render: HTML rendering for the linien-card departure card.
//!
//! Pure functions from view models to markup strings. The host owns the
//! DOM subtree the output is written into; everything interpolated from
//! sensor-controlled data goes through [`escape_html`].

mod editor;
mod escape;
mod html;
mod style;

pub use editor::{render_editor, EDITOR_HINT, EDITOR_TITLE};
pub use escape::escape_html;
pub use html::{
    render_card, render_departure_list, status_class, status_label, NO_DEPARTURES_TEXT,
};
pub use style::{CARD_STYLE, EDITOR_STYLE};
