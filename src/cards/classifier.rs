//! Card identity classification.
//!
//! The classifier answers one question: is this card a basic land? Basic
//! lands are exempt from every copy limit, so a wrong "yes" would grant
//! unlimited copies. Any lookup failure therefore yields "no".

use std::time::Duration;

use tracing::{debug, warn};

use crate::core::{MetadataError, PolicyConfig};

use super::definition::CardId;
use super::metadata::CardMetadataProvider;

/// The five basic land names.
pub const BASIC_LAND_NAMES: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];

/// Check a resolved card name against the basic land names.
#[must_use]
pub fn is_basic_land_name(name: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        BASIC_LAND_NAMES.iter().any(|b| b.eq_ignore_ascii_case(name))
    } else {
        BASIC_LAND_NAMES.contains(&name)
    }
}

/// Derived, per-request facts about a card.
///
/// Never cached: a corrected card name takes effect on the next request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardIdentity {
    /// The identifier as stored on the deck entry.
    pub card_id: CardId,

    /// Name returned by the provider, if the lookup succeeded.
    pub resolved_name: Option<String>,

    /// Exempt from copy limits.
    pub is_basic_land: bool,
}

impl CardIdentity {
    /// Identity for a card whose metadata could not be resolved.
    #[must_use]
    pub fn unresolved(card_id: CardId) -> Self {
        Self {
            card_id,
            resolved_name: None,
            is_basic_land: false,
        }
    }
}

/// Classifies cards through a metadata provider.
///
/// ## Runtime
///
/// Each lookup is bounded by `tokio::time::timeout`, so `classify` and
/// `resolve_name` must be polled inside a Tokio runtime with the time driver
/// enabled (`#[tokio::main]`, `#[tokio::test]`, or a runtime built with
/// `Builder::enable_time`). Polling them elsewhere panics.
///
/// ## Example
///
/// ```
/// use deckhaven::cards::{CardCatalog, CardClassifier, CardId, CardMetadata};
/// use deckhaven::core::PolicyConfig;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let catalog = CardCatalog::new().with_card(CardMetadata::new("f1", "Forest"));
/// let classifier = CardClassifier::new(catalog, &PolicyConfig::default());
///
/// assert!(classifier.classify(&CardId::new("c:f1")).await.is_basic_land);
/// assert!(!classifier.classify(&CardId::new("unknown")).await.is_basic_land);
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct CardClassifier<P> {
    provider: P,
    timeout: Duration,
    case_insensitive: bool,
}

impl<P: CardMetadataProvider> CardClassifier<P> {
    /// Create a classifier using the timeout and name matching from `config`.
    pub fn new(provider: P, config: &PolicyConfig) -> Self {
        Self {
            provider,
            timeout: config.metadata_timeout(),
            case_insensitive: config.case_insensitive_basic_lands,
        }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve the card's name with one bounded provider call.
    ///
    /// The `c:` prefix is stripped for the lookup only. The name is returned
    /// untrimmed, so " Forest " is not a basic land.
    pub async fn resolve_name(&self, card_id: &CardId) -> Result<String, MetadataError> {
        let lookup_id = card_id.lookup_id();
        let metadata = tokio::time::timeout(self.timeout, self.provider.lookup(lookup_id))
            .await
            .map_err(|_| MetadataError::Timeout)??;

        // Blank names are unusable; any other name is matched as given.
        if metadata.name.trim().is_empty() {
            return Err(MetadataError::NotFound(lookup_id.to_string()));
        }
        Ok(metadata.name)
    }

    /// Classify a card. Never fails: lookup errors are logged and the card
    /// is treated as not a basic land.
    pub async fn classify(&self, card_id: &CardId) -> CardIdentity {
        match self.resolve_name(card_id).await {
            Ok(name) => {
                let is_basic_land = is_basic_land_name(&name, self.case_insensitive);
                debug!(card_id = %card_id, name = %name, is_basic_land, "classified card");
                CardIdentity {
                    card_id: card_id.clone(),
                    resolved_name: Some(name),
                    is_basic_land,
                }
            }
            Err(e) => {
                warn!(card_id = %card_id, error = %e, "card metadata lookup failed; applying copy limits");
                CardIdentity::unresolved(card_id.clone())
            }
        }
    }
}
