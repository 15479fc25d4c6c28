//! Registry of card metadata for host discovery.

use crate::card::DepartureCard;
use linien_card_types::CardInfo;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

/// Registry the host's card picker reads.
///
/// Registration is a static metadata contract: hosts look cards up by their
/// type identifier and list them for the user. No runtime behavior lives
/// here.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: HashMap<String, CardInfo>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, replacing any previous registration of the same
    /// type identifier.
    pub fn register(&mut self, info: CardInfo) {
        debug!("registering card {}", info.card_type);
        self.cards.insert(info.card_type.clone(), info);
    }

    pub fn lookup(&self, card_type: &str) -> Option<&CardInfo> {
        self.cards.get(card_type)
    }

    /// All registered type identifiers, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut types: Vec<String> = self.cards.keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

static GLOBAL_REGISTRY: Lazy<RwLock<CardRegistry>> =
    Lazy::new(|| RwLock::new(CardRegistry::new()));

/// The process-wide registry instance.
pub fn global_registry() -> &'static RwLock<CardRegistry> {
    &GLOBAL_REGISTRY
}

/// Register the built-in departure card with the global registry.
pub fn register_builtin() {
    if let Ok(mut registry) = global_registry().write() {
        registry.register(DepartureCard::info());
    }
}
