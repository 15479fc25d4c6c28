//! The departure card: configuration lifecycle and render updates.

use crate::selector::collect_departures;
use crate::store::StateStore;
use linien_card_types::{CardConfig, CardError, CardInfo, DepartureListView};
use log::debug;

/// Stable type identifier the card registers under.
pub const CARD_TYPE: &str = "linien-card";

/// Fixed layout-height hint reported to the host, in host row units.
pub const CARD_SIZE: u32 = 3;

/// The departure list card.
///
/// A pure function of the state and configuration handed to it: the host
/// pushes a fresh snapshot on every observed state change and the card
/// re-derives its view from scratch, no diffing. The only state retained
/// between calls is the configuration and the last computed view.
#[derive(Debug, Default)]
pub struct DepartureCard {
    config: CardConfig,
    view: DepartureListView,
}

impl DepartureCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host-supplied configuration.
    ///
    /// `None` means the host had no configuration object at all, which is
    /// the one fatal setup error this card knows.
    pub fn set_config(&mut self, config: Option<CardConfig>) -> Result<(), CardError> {
        self.config = config.ok_or(CardError::InvalidConfiguration)?;
        Ok(())
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Recompute the view model from scratch against `store`.
    ///
    /// Never fails: missing or malformed sensor data degrades to slot
    /// omission or default substitution during selection.
    pub fn update<S: StateStore + ?Sized>(&mut self, store: &S) -> &DepartureListView {
        let departures = collect_departures(store, &self.config);
        debug!("update produced {} departure(s)", departures.len());
        self.view = DepartureListView::from_departures(departures);
        &self.view
    }

    /// Last computed view model; the empty view before the first update.
    pub fn view(&self) -> &DepartureListView {
        &self.view
    }

    /// Layout-height hint for host layout planning.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// First-time-setup configuration factory.
    pub fn stub_config() -> CardConfig {
        CardConfig::stub()
    }

    /// Registration metadata for the host's card registry.
    pub fn info() -> CardInfo {
        CardInfo::new(
            CARD_TYPE,
            "Linien Card",
            "Display upcoming transit departures from up to seven departure sensors",
            "https://github.com/linien-card/linien-card",
        )
    }
}
