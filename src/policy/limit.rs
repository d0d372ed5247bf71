//! Copy limit computation.
//!
//! Decision order:
//! 1. basic land -> unlimited
//! 2. `Limited` category -> unlimited
//! 3. singleton -> 1
//! 4. anything else, including unknown formats -> the default cap

use serde::{Deserialize, Serialize};

use crate::formats::FormatRule;

/// Maximum legal copies of one card in one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyLimit {
    /// No numeric cap.
    Unlimited,
    /// At most this many copies.
    Capped(u32),
}

impl CopyLimit {
    /// The numeric cap, if any.
    #[must_use]
    pub const fn cap(self) -> Option<u32> {
        match self {
            CopyLimit::Unlimited => None,
            CopyLimit::Capped(n) => Some(n),
        }
    }

    /// Check if there is no cap.
    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        matches!(self, CopyLimit::Unlimited)
    }

    /// Check if `quantity` copies are legal under this limit.
    #[must_use]
    pub const fn allows(self, quantity: u32) -> bool {
        match self {
            CopyLimit::Unlimited => true,
            CopyLimit::Capped(n) => quantity <= n,
        }
    }
}

impl std::fmt::Display for CopyLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyLimit::Unlimited => f.write_str("unlimited"),
            CopyLimit::Capped(n) => write!(f, "{n}"),
        }
    }
}

/// Compute the copy limit for a card.
///
/// `rule` is `None` for unrecognized formats; `default_cap` applies to
/// them and to every non-singleton, non-limited format.
///
/// ## Example
///
/// ```
/// use deckhaven::formats::FormatTable;
/// use deckhaven::policy::{compute_limit, CopyLimit};
///
/// let table = FormatTable::standard();
/// assert_eq!(compute_limit(table.get("commander"), false, 4), CopyLimit::Capped(1));
/// assert_eq!(compute_limit(table.get("commander"), true, 4), CopyLimit::Unlimited);
/// assert_eq!(compute_limit(table.get("no-such-format"), false, 4), CopyLimit::Capped(4));
/// ```
#[must_use]
pub fn compute_limit(rule: Option<&FormatRule>, is_basic_land: bool, default_cap: u32) -> CopyLimit {
    if is_basic_land {
        return CopyLimit::Unlimited;
    }
    match rule {
        Some(rule) if rule.is_limited() => CopyLimit::Unlimited,
        Some(rule) if rule.singleton => CopyLimit::Capped(1),
        _ => CopyLimit::Capped(default_cap),
    }
}

/// A copy limit together with the format context used in error messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatLimit {
    /// Display name of the format.
    pub format_name: String,

    /// Whether the format is singleton (selects "1 copy" wording).
    pub singleton: bool,

    /// The computed limit.
    pub limit: CopyLimit,
}

impl FormatLimit {
    /// Create a format limit.
    pub fn new(format_name: impl Into<String>, singleton: bool, limit: CopyLimit) -> Self {
        Self {
            format_name: format_name.into(),
            singleton,
            limit,
        }
    }

    /// An unlimited limit (no format context needed for errors).
    pub fn unlimited(format_name: impl Into<String>) -> Self {
        Self::new(format_name, false, CopyLimit::Unlimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{FormatCategory, FormatRule};

    #[test]
    fn test_priority_order() {
        let limited_singleton = FormatRule::new("Odd", FormatCategory::Limited).singleton();
        let commander = FormatRule::new("Commander", FormatCategory::Casual).singleton();
        let standard = FormatRule::new("Standard", FormatCategory::Constructed);

        // Basic land beats everything.
        assert_eq!(compute_limit(Some(&commander), true, 4), CopyLimit::Unlimited);
        assert_eq!(compute_limit(None, true, 4), CopyLimit::Unlimited);

        // Limited beats singleton.
        assert_eq!(compute_limit(Some(&limited_singleton), false, 4), CopyLimit::Unlimited);

        assert_eq!(compute_limit(Some(&commander), false, 4), CopyLimit::Capped(1));
        assert_eq!(compute_limit(Some(&standard), false, 4), CopyLimit::Capped(4));
        assert_eq!(compute_limit(None, false, 4), CopyLimit::Capped(4));
        assert_eq!(compute_limit(Some(&standard), false, 3), CopyLimit::Capped(3));
    }

    #[test]
    fn test_copy_limit_helpers() {
        assert_eq!(CopyLimit::Capped(4).cap(), Some(4));
        assert_eq!(CopyLimit::Unlimited.cap(), None);
        assert!(CopyLimit::Unlimited.allows(u32::MAX));
        assert!(CopyLimit::Capped(1).allows(1));
        assert!(!CopyLimit::Capped(1).allows(2));
        assert_eq!(CopyLimit::Unlimited.to_string(), "unlimited");
        assert_eq!(CopyLimit::Capped(4).to_string(), "4");
    }
}
