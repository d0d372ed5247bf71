//! Deck card service: the add / update / remove flows.
//!
//! Every flow reads the current quantity, asks the policy whether the
//! transition is legal, and writes only if it is. A rejected request
//! leaves the stored quantity untouched.

use serde_json::Value;
use tracing::info;

use crate::cards::{CardId, CardMetadataProvider};
use crate::core::{DeckError, DeckId, DeckResult};
use crate::policy::{parse_quantity, CopyLimitPolicy};

use super::store::{Deck, DeckCardEntry, DeckStore};

/// Deck card operations over a store and a copy-limit policy.
///
/// Needs a Tokio runtime with the time driver enabled, like
/// [`CopyLimitPolicy`].
pub struct DeckService<P, S> {
    policy: CopyLimitPolicy<P>,
    store: S,
}

impl<P, S> DeckService<P, S>
where
    P: CardMetadataProvider,
    S: DeckStore,
{
    /// Create a service.
    pub fn new(policy: CopyLimitPolicy<P>, store: S) -> Self {
        Self { policy, store }
    }

    /// The policy.
    pub fn policy(&self) -> &CopyLimitPolicy<P> {
        &self.policy
    }

    /// The store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn deck(&self, deck_id: &DeckId) -> DeckResult<Deck> {
        self.store
            .get_deck(deck_id)
            .await?
            .ok_or_else(|| DeckError::DeckNotFound(deck_id.to_string()))
    }

    fn max_quantity(&self) -> u32 {
        self.policy.config().max_quantity
    }

    /// Add `quantity` copies of a card to a deck.
    ///
    /// Creates the entry if absent, otherwise adds to it.
    pub async fn add_card(
        &self,
        deck_id: &DeckId,
        card_id: &CardId,
        quantity: &Value,
    ) -> DeckResult<DeckCardEntry> {
        let requested = parse_quantity(quantity, self.max_quantity())?;
        let deck = self.deck(deck_id).await?;
        let current = self.store.get_quantity(deck_id, card_id).await?;

        let new_quantity = self
            .policy
            .check_add(deck_id, card_id, deck.format_key(), requested, current)
            .await?;

        self.store.upsert_quantity(deck_id, card_id, new_quantity).await?;
        info!(deck_id = %deck_id, card_id = %card_id, quantity = new_quantity, "card added to deck");

        Ok(DeckCardEntry {
            deck_id: deck_id.clone(),
            card_id: card_id.clone(),
            quantity: new_quantity,
        })
    }

    /// Set an existing entry to an absolute quantity.
    pub async fn update_quantity(
        &self,
        deck_id: &DeckId,
        card_id: &CardId,
        quantity: &Value,
    ) -> DeckResult<DeckCardEntry> {
        let requested = parse_quantity(quantity, self.max_quantity())?;
        let deck = self.deck(deck_id).await?;
        let current = self.store.get_quantity(deck_id, card_id).await?;
        if current == 0 {
            return Err(DeckError::NotFound {
                deck_id: deck_id.to_string(),
                card_id: card_id.to_string(),
            });
        }

        let new_quantity = self
            .policy
            .check_set(card_id, deck.format_key(), requested, current)
            .await?;

        self.store.upsert_quantity(deck_id, card_id, new_quantity).await?;
        info!(deck_id = %deck_id, card_id = %card_id, quantity = new_quantity, "deck card quantity updated");

        Ok(DeckCardEntry {
            deck_id: deck_id.clone(),
            card_id: card_id.clone(),
            quantity: new_quantity,
        })
    }

    /// Remove a card from a deck. Always legal if the entry exists.
    pub async fn remove_card(&self, deck_id: &DeckId, card_id: &CardId) -> DeckResult<()> {
        self.deck(deck_id).await?;
        if !self.store.remove(deck_id, card_id).await? {
            return Err(DeckError::NotFound {
                deck_id: deck_id.to_string(),
                card_id: card_id.to_string(),
            });
        }
        info!(deck_id = %deck_id, card_id = %card_id, "card removed from deck");
        Ok(())
    }

    /// All entries of a deck.
    pub async fn entries(&self, deck_id: &DeckId) -> DeckResult<Vec<DeckCardEntry>> {
        self.deck(deck_id).await?;
        self.store.entries(deck_id).await
    }
}
