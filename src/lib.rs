//! # deckhaven
//!
//! Deck construction rules for a trading-card collection tracker.
//!
//! ## Design Principles
//!
//! 1. **Pure Decisions**: Limit computation and quantity validation are
//!    pure functions. Callers own persistence.
//!
//! 2. **Restrictive on Failure**: If card metadata can't be resolved, the
//!    card is treated as a normal card and copy limits apply. A flaky
//!    lookup never grants unlimited copies.
//!
//! 3. **Permissive Formats**: Format keys are free text. Unknown keys are
//!    not errors; they get the default constructed cap.
//!
//! ## Copy Limits
//!
//! | Card / Format | Limit |
//! |---|---|
//! | Basic land (Plains, Island, Swamp, Mountain, Forest) | unlimited |
//! | `Limited` category (Draft, Sealed, Cube) | unlimited |
//! | Singleton (Commander, Brawl, Oathbreaker) | 1 |
//! | Anything else, including unknown formats | 4 |
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deck IDs
//! - `formats`: Format rules and the format rule table
//! - `cards`: Card IDs, metadata provider, catalog, basic-land classifier
//! - `policy`: Copy limits, quantity validation, the add-card entry point
//! - `deck`: Deck store interface and add/update/remove flows
//! - `binder`: Binder slot addressing and owned-copy highlighting

pub mod core;
pub mod formats;
pub mod cards;
pub mod policy;
pub mod deck;
pub mod binder;

// Re-export commonly used types
pub use crate::core::{DeckError, DeckId, DeckResult, ErrorKind, MetadataError, PolicyConfig};

pub use crate::formats::{FormatCategory, FormatRule, FormatTable};

pub use crate::cards::{
    CardCatalog, CardClassifier, CardId, CardIdentity, CardMetadata, CardMetadataProvider,
};

pub use crate::policy::{
    compute_limit, parse_quantity, validate_add, validate_new_card, validate_set,
    AddCardOutcome, CopyLimit, CopyLimitPolicy, FormatLimit,
};

pub use crate::deck::{Deck, DeckCardEntry, DeckService, DeckStore, InMemoryDeckStore};

pub use crate::binder::{BinderLayout, SlotAddress};
