//! Card metadata provider interface.
//!
//! The provider is the only I/O the rule core performs. Implementations
//! wrap a remote card-data API; tests and offline tools use `CardCatalog`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::MetadataError;

use super::definition::CardMetadata;

/// Read-only source of card metadata.
///
/// `card_id` is always an unprefixed provider identifier. Implementations
/// must tolerate arbitrary strings and report failures as `MetadataError`
/// rather than panicking.
#[async_trait]
pub trait CardMetadataProvider: Send + Sync {
    /// Look up one card by identifier.
    async fn lookup(&self, card_id: &str) -> Result<CardMetadata, MetadataError>;

    /// Search cards by free text.
    ///
    /// Default implementation returns no results.
    async fn search(&self, _text: &str) -> Result<Vec<CardMetadata>, MetadataError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl<T> CardMetadataProvider for Arc<T>
where
    T: CardMetadataProvider + ?Sized,
{
    async fn lookup(&self, card_id: &str) -> Result<CardMetadata, MetadataError> {
        (**self).lookup(card_id).await
    }

    async fn search(&self, text: &str) -> Result<Vec<CardMetadata>, MetadataError> {
        (**self).search(text).await
    }
}
