//! Error taxonomy for deck operations.
//!
//! - `DeckError`: user-facing failures of an add/update/remove request
//! - `MetadataError`: card metadata provider failures, never surfaced to
//!   end users (the classifier logs them and falls back)

use serde::{Deserialize, Serialize};

/// Coarse classification of a `DeckError`, as reported to API callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Requested total exceeds the format's copy limit.
    LimitExceeded,
    /// Requested quantity is not a positive integer.
    InvalidQuantity,
    /// Deck entry does not exist.
    NotFound,
    /// Persistence failure.
    Store,
}

impl ErrorKind {
    /// Stable string name for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LimitExceeded => "LimitExceeded",
            ErrorKind::InvalidQuantity => "InvalidQuantity",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Store => "Store",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a deck add/update/remove request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("invalid {field}: {reason}")]
    InvalidQuantity { field: String, reason: String },

    #[error("{}", limit_message(.format_name, .singleton, .limit, .current))]
    LimitExceeded {
        format_name: String,
        singleton: bool,
        limit: u32,
        current: u32,
    },

    #[error("card {card_id} is not in deck {deck_id}")]
    NotFound { deck_id: String, card_id: String },

    #[error("deck {0} not found")]
    DeckNotFound(String),

    #[error("store error: {0}")]
    Store(String),
}

impl DeckError {
    /// Build an `InvalidQuantity` error for the `quantity` field.
    pub fn invalid_quantity(reason: impl Into<String>) -> Self {
        DeckError::InvalidQuantity {
            field: "quantity".to_string(),
            reason: reason.into(),
        }
    }

    /// Coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            DeckError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            DeckError::NotFound { .. } | DeckError::DeckNotFound(_) => ErrorKind::NotFound,
            DeckError::Store(_) => ErrorKind::Store,
        }
    }

    /// True for failures caused by the request itself (400-class).
    ///
    /// These are never worth retrying.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DeckError::InvalidQuantity { .. } | DeckError::LimitExceeded { .. }
        )
    }
}

fn limit_message(format_name: &str, singleton: &bool, limit: &u32, current: &u32) -> String {
    if *singleton {
        if *current > 0 {
            format!("{format_name} only allows 1 copy of each card, and this deck already has it.")
        } else {
            format!("{format_name} only allows 1 copy of each card.")
        }
    } else {
        format!(
            "{format_name} only allows {limit} copies of each card. \
             You already have {current} copy(ies) in this deck."
        )
    }
}

/// Result alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Failure of a card metadata lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("card {0} not found")]
    NotFound(String),

    #[error("metadata lookup timed out")]
    Timeout,

    #[error("metadata transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_message() {
        let err = DeckError::LimitExceeded {
            format_name: "Commander".into(),
            singleton: true,
            limit: 1,
            current: 0,
        };
        assert_eq!(err.to_string(), "Commander only allows 1 copy of each card.");

        let err = DeckError::LimitExceeded {
            format_name: "Commander".into(),
            singleton: true,
            limit: 1,
            current: 1,
        };
        assert!(err.to_string().contains("1 copy of each card"));
        assert!(err.to_string().contains("already has it"));
    }

    #[test]
    fn test_multi_copy_message() {
        let err = DeckError::LimitExceeded {
            format_name: "Standard".into(),
            singleton: false,
            limit: 4,
            current: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("only allows 4 copies"));
        assert!(msg.contains("already have 3 copy(ies)"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            DeckError::invalid_quantity("must be positive").kind(),
            ErrorKind::InvalidQuantity
        );
        assert_eq!(DeckError::Store("down".into()).kind(), ErrorKind::Store);
        assert_eq!(DeckError::DeckNotFound("d".into()).kind(), ErrorKind::NotFound);
        assert_eq!(ErrorKind::LimitExceeded.to_string(), "LimitExceeded");
    }

    #[test]
    fn test_client_errors() {
        assert!(DeckError::invalid_quantity("x").is_client_error());
        assert!(!DeckError::Store("x".into()).is_client_error());
        assert!(!DeckError::NotFound {
            deck_id: "d".into(),
            card_id: "c".into()
        }
        .is_client_error());
    }

    #[test]
    fn test_invalid_quantity_message() {
        let err = DeckError::invalid_quantity("must be a positive integer");
        assert_eq!(err.to_string(), "invalid quantity: must be a positive integer");
    }
}
