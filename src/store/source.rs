//! Supplier trait for collection data

use crate::core::record::Record;
use anyhow::Result;
use async_trait::async_trait;

/// Supplies the materialized record sequence a collection is loaded from.
///
/// The query layer's only contract with the data layer: it receives a
/// finite, already-materialized, ordered sequence. In this crate the
/// implementation is the seed data (`catalog::SeedSource`); a real
/// deployment would back it with an API client.
#[async_trait]
pub trait CollectionSource<R: Record>: Send + Sync {
    /// Fetch every record, in display order
    async fn fetch(&self) -> Result<Vec<R>>;
}
