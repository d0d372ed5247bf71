//! Policy configuration.
//!
//! `PolicyConfig` carries the tunables of the copy-limit engine:
//! - the default copy cap for constructed and unrecognized formats
//! - the metadata lookup timeout
//! - whether basic-land names are matched case-insensitively
//! - the largest quantity a single request may carry
//!
//! Defaults match observed deck-construction behavior, so most callers
//! use `PolicyConfig::default()` and override single fields with the
//! builder methods.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Copy cap for constructed formats (the "4-copy rule").
pub const DEFAULT_COPY_LIMIT: u32 = 4;

/// Timeout for one card metadata lookup, in milliseconds.
pub const DEFAULT_METADATA_TIMEOUT_MS: u64 = 3_000;

/// Upper bound on a single requested quantity.
pub const DEFAULT_MAX_QUANTITY: u32 = 9_999;

/// Configuration for the copy-limit engine.
///
/// ## Example
///
/// ```
/// use deckhaven::core::PolicyConfig;
///
/// let config = PolicyConfig::default()
///     .with_metadata_timeout_ms(500)
///     .case_insensitive_basic_lands();
///
/// assert_eq!(config.default_copy_limit, 4);
/// assert_eq!(config.metadata_timeout().as_millis(), 500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Cap applied to non-singleton, non-limited and unknown formats.
    pub default_copy_limit: u32,

    /// Timeout for the card metadata provider call.
    pub metadata_timeout_ms: u64,

    /// Match basic-land names ignoring ASCII case.
    ///
    /// Off by default: "forest" is not a basic land unless enabled.
    pub case_insensitive_basic_lands: bool,

    /// Largest quantity accepted in a single add/update request.
    pub max_quantity: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default_copy_limit: DEFAULT_COPY_LIMIT,
            metadata_timeout_ms: DEFAULT_METADATA_TIMEOUT_MS,
            case_insensitive_basic_lands: false,
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl PolicyConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the default copy cap.
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_default_copy_limit(mut self, limit: u32) -> Self {
        assert!(limit > 0, "Copy limit must be at least 1");
        self.default_copy_limit = limit;
        self
    }

    /// Set the metadata lookup timeout in milliseconds.
    #[must_use]
    pub fn with_metadata_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.metadata_timeout_ms = timeout_ms;
        self
    }

    /// Match basic-land names ignoring ASCII case.
    #[must_use]
    pub fn case_insensitive_basic_lands(mut self) -> Self {
        self.case_insensitive_basic_lands = true;
        self
    }

    /// Set the largest quantity accepted per request.
    #[must_use]
    pub fn with_max_quantity(mut self, max: u32) -> Self {
        self.max_quantity = max;
        self
    }

    /// Metadata lookup timeout as a `Duration`.
    #[must_use]
    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_millis(self.metadata_timeout_ms)
    }
}
