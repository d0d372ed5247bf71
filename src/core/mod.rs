//! Core types shared by every module: configuration, errors, deck IDs.

pub mod config;
pub mod error;
pub mod ids;

pub use config::{PolicyConfig, DEFAULT_COPY_LIMIT, DEFAULT_MAX_QUANTITY, DEFAULT_METADATA_TIMEOUT_MS};
pub use error::{DeckError, DeckResult, ErrorKind, MetadataError};
pub use ids::DeckId;
