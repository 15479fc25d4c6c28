//! Static registration metadata for the host's card registry.

/// Metadata a card declares to the host's card registry.
///
/// A static contract, not runtime behavior: the host uses it to list the
/// card in its picker and to route configurations by type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// Stable type identifier.
    pub card_type: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this card shows.
    pub description: String,
    /// Documentation link.
    pub documentation_url: String,
    /// Whether the host should render a live preview in its card picker.
    pub preview: bool,
}

impl CardInfo {
    pub fn new(
        card_type: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        documentation_url: impl Into<String>,
    ) -> Self {
        Self {
            card_type: card_type.into(),
            name: name.into(),
            description: description.into(),
            documentation_url: documentation_url.into(),
            preview: false,
        }
    }
}
