//! Decks: persistence interface and the card add/update/remove flows.
//!
//! ## Key Types
//!
//! - `Deck`, `DeckCardEntry`: stored records
//! - `DeckStore`: persistence trait; `InMemoryDeckStore` implements it
//! - `DeckService`: validates through `CopyLimitPolicy`, then writes

pub mod service;
pub mod store;

pub use service::DeckService;
pub use store::{Deck, DeckCardEntry, DeckStore, InMemoryDeckStore};
