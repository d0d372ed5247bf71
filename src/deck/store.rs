//! Deck persistence interface and an in-memory implementation.
//!
//! The store owns decks and their `(deck, card) -> quantity` entries and
//! guarantees at most one entry per pair. Concurrent read-modify-write on
//! the same pair is the store's problem, not the policy's.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{DeckError, DeckId, DeckResult};

/// A deck record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    /// Free-text format key; `None` for decks without a format.
    pub format: Option<String>,
}

impl Deck {
    /// Create a deck without a format.
    pub fn new(id: impl Into<DeckId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            format: None,
        }
    }

    /// Set the format key (builder pattern).
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// The format key, or "" when unset.
    #[must_use]
    pub fn format_key(&self) -> &str {
        self.format.as_deref().unwrap_or("")
    }
}

/// One card's quantity in one deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCardEntry {
    pub deck_id: DeckId,
    pub card_id: CardId,
    /// Always at least 1.
    pub quantity: u32,
}

/// Deck persistence.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Fetch a deck record.
    async fn get_deck(&self, deck_id: &DeckId) -> DeckResult<Option<Deck>>;

    /// Current quantity of a card in a deck; 0 if absent.
    async fn get_quantity(&self, deck_id: &DeckId, card_id: &CardId) -> DeckResult<u32>;

    /// Create or replace an entry. `quantity` must be at least 1.
    async fn upsert_quantity(&self, deck_id: &DeckId, card_id: &CardId, quantity: u32) -> DeckResult<()>;

    /// Delete an entry. Returns false if there was none.
    async fn remove(&self, deck_id: &DeckId, card_id: &CardId) -> DeckResult<bool>;

    /// All entries of a deck, sorted by card ID.
    async fn entries(&self, deck_id: &DeckId) -> DeckResult<Vec<DeckCardEntry>>;
}

#[derive(Debug, Default)]
struct StoreInner {
    decks: FxHashMap<DeckId, Deck>,
    quantities: FxHashMap<DeckId, FxHashMap<CardId, u32>>,
}

/// Deck store kept in process memory.
///
/// ## Example
///
/// ```
/// use deckhaven::deck::{Deck, InMemoryDeckStore};
///
/// let store = InMemoryDeckStore::new();
/// store.insert_deck(Deck::new("d1", "Mono Red").with_format("modern"));
/// assert_eq!(store.deck_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDeckStore {
    inner: RwLock<StoreInner>,
}

fn poisoned() -> DeckError {
    DeckError::Store("in-memory store lock poisoned".to_string())
}

impl InMemoryDeckStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a deck record.
    ///
    /// A single map insert cannot leave the store half-written, so this
    /// recovers from a poisoned lock instead of dropping the deck.
    pub fn insert_deck(&self, deck: Deck) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.decks.insert(deck.id.clone(), deck);
    }

    /// Number of decks.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).decks.len()
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckStore {
    async fn get_deck(&self, deck_id: &DeckId) -> DeckResult<Option<Deck>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.decks.get(deck_id).cloned())
    }

    async fn get_quantity(&self, deck_id: &DeckId, card_id: &CardId) -> DeckResult<u32> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .quantities
            .get(deck_id)
            .and_then(|cards| cards.get(card_id))
            .copied()
            .unwrap_or(0))
    }

    async fn upsert_quantity(&self, deck_id: &DeckId, card_id: &CardId, quantity: u32) -> DeckResult<()> {
        if quantity == 0 {
            return Err(DeckError::invalid_quantity("must be a positive integer"));
        }
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if !inner.decks.contains_key(deck_id) {
            return Err(DeckError::DeckNotFound(deck_id.to_string()));
        }
        inner
            .quantities
            .entry(deck_id.clone())
            .or_default()
            .insert(card_id.clone(), quantity);
        Ok(())
    }

    async fn remove(&self, deck_id: &DeckId, card_id: &CardId) -> DeckResult<bool> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        Ok(inner
            .quantities
            .get_mut(deck_id)
            .and_then(|cards| cards.remove(card_id))
            .is_some())
    }

    async fn entries(&self, deck_id: &DeckId) -> DeckResult<Vec<DeckCardEntry>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        let mut entries: Vec<_> = inner
            .quantities
            .get(deck_id)
            .into_iter()
            .flatten()
            .map(|(card_id, &quantity)| DeckCardEntry {
                deck_id: deck_id.clone(),
                card_id: card_id.clone(),
                quantity,
            })
            .collect();
        entries.sort_by(|a, b| a.card_id.cmp(&b.card_id));
        Ok(entries)
    }
}
