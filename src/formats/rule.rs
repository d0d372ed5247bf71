//! Format rules - static deck-construction rules per format.
//!
//! Only two fields drive copy limits: `singleton` and whether the
//! category is `Limited`. The display name feeds error messages.

use serde::{Deserialize, Serialize};

/// Category of a format.
///
/// Only `Limited` changes copy-limit behavior: drafted and sealed pools
/// are not copy-restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatCategory {
    /// Rotating constructed formats (Standard, Pioneer).
    Constructed,
    /// Non-rotating constructed formats (Modern, Legacy, Vintage).
    Eternal,
    /// Multiplayer and casual formats (Commander, Brawl).
    Casual,
    /// Decks built from a fixed pool (Draft, Sealed).
    Limited,
}

/// Deck-construction rule for one format.
///
/// ## Example
///
/// ```
/// use deckhaven::formats::{FormatCategory, FormatRule};
///
/// let commander = FormatRule::new("Commander", FormatCategory::Casual).singleton();
/// assert!(commander.singleton);
/// assert!(!commander.is_limited());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    /// Display name ("Commander", "Standard").
    pub name: String,

    /// Format category.
    pub category: FormatCategory,

    /// At most one copy of each non-basic-land card.
    #[serde(default)]
    pub singleton: bool,
}

impl FormatRule {
    /// Create a non-singleton rule.
    pub fn new(name: impl Into<String>, category: FormatCategory) -> Self {
        Self {
            name: name.into(),
            category,
            singleton: false,
        }
    }

    /// Mark the format as singleton.
    #[must_use]
    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// True if the format is in the `Limited` category.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.category == FormatCategory::Limited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = FormatRule::new("Brawl", FormatCategory::Casual).singleton();
        assert_eq!(rule.name, "Brawl");
        assert!(rule.singleton);
        assert!(!rule.is_limited());

        let draft = FormatRule::new("Draft", FormatCategory::Limited);
        assert!(draft.is_limited());
        assert!(!draft.singleton);
    }

    #[test]
    fn test_rule_serialization() {
        let json = r#"{ "name": "Sealed", "category": "Limited" }"#;
        let rule: FormatRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.category, FormatCategory::Limited);
        assert!(!rule.singleton);

        let back = serde_json::to_string(&rule).unwrap();
        assert!(back.contains("\"Limited\""));
    }
}
