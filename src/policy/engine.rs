//! Copy-limit policy entry point.
//!
//! `CopyLimitPolicy` ties together the format table, the card classifier
//! and the validation functions. It never writes: callers persist the
//! returned quantity.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::cards::{CardClassifier, CardId, CardMetadataProvider};
use crate::core::{DeckError, DeckId, DeckResult, ErrorKind, PolicyConfig};
use crate::formats::FormatTable;

use super::limit::{compute_limit, FormatLimit};
use super::validate::{parse_quantity, validate_add, validate_new_card, validate_set};

/// Result of evaluating an add-card request, as reported to API callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AddCardOutcome {
    /// The add is legal; persist `new_quantity`.
    #[serde(rename_all = "camelCase")]
    Accepted { new_quantity: u32 },
    /// The add was rejected; nothing may be written.
    Rejected { kind: ErrorKind, message: String },
}

impl AddCardOutcome {
    /// Check if the add was accepted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, AddCardOutcome::Accepted { .. })
    }

    /// The new quantity, if accepted.
    #[must_use]
    pub fn new_quantity(&self) -> Option<u32> {
        match self {
            AddCardOutcome::Accepted { new_quantity } => Some(*new_quantity),
            AddCardOutcome::Rejected { .. } => None,
        }
    }
}

impl From<DeckResult<u32>> for AddCardOutcome {
    fn from(result: DeckResult<u32>) -> Self {
        match result {
            Ok(new_quantity) => AddCardOutcome::Accepted { new_quantity },
            Err(e) => AddCardOutcome::Rejected {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// Copy-limit policy over a metadata provider.
///
/// ## Runtime
///
/// Card classification runs under `tokio::time::timeout`. The async methods
/// must be polled inside a Tokio runtime with the time driver enabled, as in
/// the example below; without it they panic.
///
/// ## Example
///
/// ```
/// use deckhaven::cards::{CardCatalog, CardId, CardMetadata};
/// use deckhaven::core::{DeckId, PolicyConfig};
/// use deckhaven::policy::CopyLimitPolicy;
/// use serde_json::json;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let catalog = CardCatalog::new().with_card(CardMetadata::new("ring", "Sol Ring"));
/// let policy = CopyLimitPolicy::new(catalog, PolicyConfig::default());
///
/// let outcome = policy
///     .evaluate_add_card(&DeckId::new("d1"), &CardId::new("ring"), "commander", &json!(1), 0)
///     .await;
/// assert_eq!(outcome.new_quantity(), Some(1));
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct CopyLimitPolicy<P> {
    classifier: CardClassifier<P>,
    formats: FormatTable,
    config: PolicyConfig,
}

impl<P: CardMetadataProvider> CopyLimitPolicy<P> {
    /// Create a policy using the built-in format table.
    pub fn new(provider: P, config: PolicyConfig) -> Self {
        Self::with_formats(provider, FormatTable::standard().clone(), config)
    }

    /// Create a policy with a custom format table.
    pub fn with_formats(provider: P, formats: FormatTable, config: PolicyConfig) -> Self {
        Self {
            classifier: CardClassifier::new(provider, &config),
            formats,
            config,
        }
    }

    /// The card classifier.
    pub fn classifier(&self) -> &CardClassifier<P> {
        &self.classifier
    }

    /// The format table.
    pub fn formats(&self) -> &FormatTable {
        &self.formats
    }

    /// The configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Limit for a format key, given an already classified card.
    ///
    /// Unknown format keys get the default cap.
    #[must_use]
    pub fn limit_for(&self, format_key: &str, is_basic_land: bool) -> FormatLimit {
        let rule = self.formats.get(format_key);
        let limit = compute_limit(rule, is_basic_land, self.config.default_copy_limit);
        FormatLimit::new(
            self.formats.display_name(format_key),
            rule.is_some_and(|r| r.singleton),
            limit,
        )
    }

    /// Classify the card and compute its limit in `format_key`.
    pub async fn resolve_limit(&self, card_id: &CardId, format_key: &str) -> FormatLimit {
        let identity = self.classifier.classify(card_id).await;
        self.limit_for(format_key, identity.is_basic_land)
    }

    /// Evaluate adding `requested` copies to a deck entry holding `current`.
    ///
    /// `current == 0` means the card is not in the deck yet; the requested
    /// quantity is then validated directly as the new quantity.
    pub async fn check_add(
        &self,
        deck_id: &DeckId,
        card_id: &CardId,
        format_key: &str,
        requested: u32,
        current: u32,
    ) -> DeckResult<u32> {
        if requested == 0 || requested > self.config.max_quantity {
            return Err(DeckError::invalid_quantity(format!(
                "must be between 1 and {}",
                self.config.max_quantity
            )));
        }

        let limit = self.resolve_limit(card_id, format_key).await;
        let result = if current == 0 {
            validate_new_card(requested, &limit)
        } else {
            validate_add(current, requested, &limit)
        };

        debug!(
            deck_id = %deck_id,
            card_id = %card_id,
            format = %limit.format_name,
            limit = %limit.limit,
            current,
            requested,
            accepted = result.is_ok(),
            "evaluated add"
        );
        result
    }

    /// Evaluate setting an existing entry to an absolute quantity.
    pub async fn check_set(
        &self,
        card_id: &CardId,
        format_key: &str,
        new_quantity: u32,
        current: u32,
    ) -> DeckResult<u32> {
        if new_quantity == 0 || new_quantity > self.config.max_quantity {
            return Err(DeckError::invalid_quantity(format!(
                "must be between 1 and {}",
                self.config.max_quantity
            )));
        }
        let limit = self.resolve_limit(card_id, format_key).await;
        validate_set(current, new_quantity, &limit)
    }

    /// Evaluate an add-card request as received from an API caller.
    ///
    /// `requested_quantity` is the raw JSON field; it is validated before
    /// any metadata lookup happens.
    pub async fn evaluate_add_card(
        &self,
        deck_id: &DeckId,
        card_id: &CardId,
        format_key: &str,
        requested_quantity: &Value,
        current_quantity: u32,
    ) -> AddCardOutcome {
        let requested = match parse_quantity(requested_quantity, self.config.max_quantity) {
            Ok(q) => q,
            Err(e) => return Result::<u32, DeckError>::Err(e).into(),
        };
        self.check_add(deck_id, card_id, format_key, requested, current_quantity)
            .await
            .into()
    }
}
