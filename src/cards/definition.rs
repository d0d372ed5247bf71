//! Card identifiers and card metadata.
//!
//! `CardId` is the opaque identifier stored on deck entries. A `c:` prefix
//! marks a commander-partner reference to the underlying card: the prefix
//! is dropped for metadata lookups but kept for deck-entry identity, so
//! `c:abc` and `abc` are two distinct deck entries for the same card.
//!
//! `CardMetadata` is what the metadata provider returns for a card.

use serde::{Deserialize, Serialize};

/// Prefix marking a reference to the underlying card.
pub const UNDERLYING_CARD_PREFIX: &str = "c:";

/// Identifier of a card as stored on a deck entry.
///
/// ## Example
///
/// ```
/// use deckhaven::cards::CardId;
///
/// let partner = CardId::new("c:5f8287b1");
/// let plain = CardId::new("5f8287b1");
///
/// assert_ne!(partner, plain);
/// assert_eq!(partner.lookup_id(), plain.lookup_id());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier to send to the metadata provider.
    ///
    /// Strips one leading `c:` prefix.
    #[must_use]
    pub fn lookup_id(&self) -> &str {
        self.0
            .strip_prefix(UNDERLYING_CARD_PREFIX)
            .unwrap_or(&self.0)
    }

    /// True if this identifier carries the `c:` prefix.
    #[must_use]
    pub fn is_underlying_reference(&self) -> bool {
        self.0.starts_with(UNDERLYING_CARD_PREFIX)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card data returned by the metadata provider.
///
/// Only `name` is used by deck rules; the rest is carried for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// Provider identifier (never prefixed).
    pub id: String,

    /// Card name.
    pub name: String,

    /// Full type line ("Basic Land — Forest").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,

    /// Mana cost in brace notation ("{1}{R}").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,

    /// Color letters (W, U, B, R, G).
    #[serde(default)]
    pub colors: Vec<String>,

    /// Rarity ("common", "mythic").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl CardMetadata {
    /// Create metadata with just an ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = Some(mana_cost.into());
        self
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Set the image URL (builder pattern).
    #[must_use]
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_id_strips_prefix() {
        assert_eq!(CardId::new("c:abc").lookup_id(), "abc");
        assert_eq!(CardId::new("abc").lookup_id(), "abc");
        // Only one prefix is stripped.
        assert_eq!(CardId::new("c:c:abc").lookup_id(), "c:abc");
        assert_eq!(CardId::new("c:").lookup_id(), "");
    }

    #[test]
    fn test_prefix_keeps_identity() {
        let partner = CardId::new("c:abc");
        let plain = CardId::new("abc");
        assert!(partner.is_underlying_reference());
        assert!(!plain.is_underlying_reference());
        assert_ne!(partner, plain);
        assert_eq!(format!("{}", partner), "c:abc");
    }

    #[test]
    fn test_metadata_builder() {
        let bolt = CardMetadata::new("e3285e6b", "Lightning Bolt")
            .with_type_line("Instant")
            .with_mana_cost("{R}")
            .with_colors(["R"])
            .with_rarity("common");

        assert_eq!(bolt.name, "Lightning Bolt");
        assert_eq!(bolt.colors, vec!["R".to_string()]);
        assert_eq!(bolt.mana_cost.as_deref(), Some("{R}"));
        assert!(bolt.image_uri.is_none());
    }

    #[test]
    fn test_metadata_deserialize_minimal() {
        let meta: CardMetadata = serde_json::from_str(r#"{ "id": "x", "name": "Island" }"#).unwrap();
        assert_eq!(meta.name, "Island");
        assert!(meta.colors.is_empty());
        assert!(meta.type_line.is_none());
    }
}
