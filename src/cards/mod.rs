//! Card system: identifiers, metadata, catalog, classification.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier stored on deck entries (may carry a `c:` prefix)
//! - `CardMetadata`: Name, type line, mana cost, colors, rarity, image
//! - `CardMetadataProvider`: Async lookup/search interface
//! - `CardCatalog`: In-memory provider
//! - `CardClassifier`: Basic-land classification with fail-safe fallback

pub mod classifier;
pub mod definition;
pub mod metadata;
pub mod registry;

pub use classifier::{is_basic_land_name, CardClassifier, CardIdentity, BASIC_LAND_NAMES};
pub use definition::{CardId, CardMetadata, UNDERLYING_CARD_PREFIX};
pub use metadata::CardMetadataProvider;
pub use registry::CardCatalog;
