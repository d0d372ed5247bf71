//! In-memory card catalog.
//!
//! `CardCatalog` stores card metadata keyed by provider identifier and
//! implements `CardMetadataProvider`, so it can stand in for the remote
//! card-data API in tests and offline tools.

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::core::MetadataError;

use super::definition::CardMetadata;
use super::metadata::CardMetadataProvider;

/// In-memory catalog of card metadata.
///
/// ## Example
///
/// ```
/// use deckhaven::cards::{CardCatalog, CardMetadata};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardMetadata::new("bolt", "Lightning Bolt"));
///
/// assert_eq!(catalog.get("bolt").unwrap().name, "Lightning Bolt");
/// assert!(catalog.get("c:bolt").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardMetadata>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register card metadata.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardMetadata) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Register card metadata (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: CardMetadata) -> Self {
        self.register(card);
        self
    }

    /// Get metadata by provider ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardMetadata> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &CardMetadata> {
        self.cards.values()
    }

    /// Cards whose name contains `text`, ignoring case, sorted by name.
    pub fn search_name(&self, text: &str) -> Vec<&CardMetadata> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<_> = self
            .cards
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        found
    }
}

#[async_trait]
impl CardMetadataProvider for CardCatalog {
    async fn lookup(&self, card_id: &str) -> Result<CardMetadata, MetadataError> {
        self.get(card_id)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(card_id.to_string()))
    }

    async fn search(&self, text: &str) -> Result<Vec<CardMetadata>, MetadataError> {
        Ok(self.search_name(text).into_iter().cloned().collect())
    }
}
