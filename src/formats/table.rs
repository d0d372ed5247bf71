//! Format rule table: format key -> `FormatRule`.
//!
//! The built-in table is initialized once per process and never mutated.
//! Keys are free text coming from deck records, so lookups trim and
//! lowercase the key. A missing key is not an error: callers fall back to
//! the default constructed policy.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::rule::{FormatCategory, FormatRule};

/// Read-only mapping from format key to rule.
///
/// ## Example
///
/// ```
/// use deckhaven::formats::FormatTable;
///
/// let table = FormatTable::standard();
/// assert!(table.get("Commander").unwrap().singleton);
/// assert!(table.get("draft").unwrap().is_limited());
/// assert!(table.get("kitchen-table").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatTable {
    rules: FxHashMap<String, FormatRule>,
}

static STANDARD_TABLE: OnceLock<FormatTable> = OnceLock::new();

impl FormatTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, shared for the life of the process.
    pub fn standard() -> &'static FormatTable {
        STANDARD_TABLE.get_or_init(Self::builtin)
    }

    fn builtin() -> Self {
        use FormatCategory::*;

        let mut table = Self::new();
        for (key, name, category) in [
            ("standard", "Standard", Constructed),
            ("pioneer", "Pioneer", Constructed),
            ("explorer", "Explorer", Constructed),
            ("alchemy", "Alchemy", Constructed),
            ("historic", "Historic", Constructed),
            ("timeless", "Timeless", Eternal),
            ("modern", "Modern", Eternal),
            ("legacy", "Legacy", Eternal),
            ("vintage", "Vintage", Eternal),
            ("pauper", "Pauper", Eternal),
        ] {
            table.insert(key, FormatRule::new(name, category));
        }
        for (key, name) in [
            ("commander", "Commander"),
            ("brawl", "Brawl"),
            ("standardbrawl", "Standard Brawl"),
            ("oathbreaker", "Oathbreaker"),
            ("duel", "Duel Commander"),
        ] {
            table.insert(key, FormatRule::new(name, Casual).singleton());
        }
        for (key, name) in [("draft", "Draft"), ("sealed", "Sealed"), ("cube", "Cube")] {
            table.insert(key, FormatRule::new(name, Limited));
        }
        table
    }

    /// Parse a table from a JSON object of `key -> rule`.
    ///
    /// Fails if two keys name the same format after normalization, such as
    /// `"Modern"` and `" modern"`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: FxHashMap<String, FormatRule> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (key, rule) in raw {
            let normalized = normalize_key(&key);
            if table.rules.contains_key(&normalized) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate format key {normalized:?}"
                )));
            }
            table.rules.insert(normalized, rule);
        }
        Ok(table)
    }

    /// Built-in rules with `overrides` replacing or adding entries.
    #[must_use]
    pub fn with_overrides(overrides: &FormatTable) -> Self {
        let mut table = Self::standard().clone();
        for (key, rule) in &overrides.rules {
            table.rules.insert(key.clone(), rule.clone());
        }
        table
    }

    /// Insert or replace a rule.
    pub fn insert(&mut self, key: &str, rule: FormatRule) {
        self.rules.insert(normalize_key(key), rule);
    }

    /// Look up a rule by format key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FormatRule> {
        self.rules.get(&normalize_key(key))
    }

    /// Display name for a format key.
    ///
    /// Unknown keys display as given; a blank key displays as "This format".
    #[must_use]
    pub fn display_name(&self, key: &str) -> String {
        match self.get(key) {
            Some(rule) => rule.name.clone(),
            None if key.trim().is_empty() => "This format".to_string(),
            None => key.trim().to_string(),
        }
    }

    /// Number of formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(key, rule)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatRule)> {
        self.rules.iter().map(|(k, r)| (k.as_str(), r))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories() {
        let table = FormatTable::standard();

        let commander = table.get("commander").unwrap();
        assert!(commander.singleton);
        assert_eq!(commander.category, FormatCategory::Casual);

        let standard = table.get("standard").unwrap();
        assert!(!standard.singleton);
        assert!(!standard.is_limited());

        for key in ["draft", "sealed", "cube"] {
            assert!(table.get(key).unwrap().is_limited(), "{key} should be Limited");
        }
    }

    #[test]
    fn test_key_normalization() {
        let table = FormatTable::standard();
        assert_eq!(table.get("  Commander ").unwrap().name, "Commander");
        assert_eq!(table.get("STANDARD").unwrap().name, "Standard");
    }

    #[test]
    fn test_unknown_key() {
        let table = FormatTable::standard();
        assert!(table.get("frontier").is_none());
        assert!(table.get("").is_none());
        assert_eq!(table.display_name("frontier"), "frontier");
        assert_eq!(table.display_name("  "), "This format");
        assert_eq!(table.display_name("brawl"), "Brawl");
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(FormatTable::standard(), FormatTable::standard()));
    }

    #[test]
    fn test_from_json_and_overrides() {
        let json = r#"{
            "Highlander": { "name": "Canadian Highlander", "category": "Eternal", "singleton": true },
            "modern": { "name": "Modern", "category": "Limited" }
        }"#;
        let custom = FormatTable::from_json(json).unwrap();
        assert_eq!(custom.len(), 2);
        assert!(custom.get("highlander").unwrap().singleton);

        let merged = FormatTable::with_overrides(&custom);
        assert_eq!(merged.len(), FormatTable::standard().len() + 1);
        assert!(merged.get("modern").unwrap().is_limited());
        assert!(!FormatTable::standard().get("modern").unwrap().is_limited());
    }

    #[test]
    fn test_from_json_rejects_colliding_keys() {
        let json = r#"{
            "Modern": { "name": "Modern", "category": "Constructed" },
            "modern ": { "name": "Modern Singleton", "category": "Constructed", "singleton": true }
        }"#;
        let err = FormatTable::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate format key \"modern\""));

        let distinct = r#"{
            "Modern": { "name": "Modern", "category": "Constructed" },
            "pioneer": { "name": "Pioneer", "category": "Constructed" }
        }"#;
        assert_eq!(FormatTable::from_json(distinct).unwrap().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"{ "x": { "name": "X", "category": "Mystery" } }"#;
        assert!(FormatTable::from_json(json).is_err());
    }
}
