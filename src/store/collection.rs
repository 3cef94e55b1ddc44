//! Immutable in-memory record collections

use crate::core::error::{QueryError, ValidationError};
use crate::core::record::Record;
use crate::query::criteria::FilterCriteria;
use crate::query::engine::{self, QueryOutcome};
use crate::query::sort::SortTable;
use std::collections::HashSet;
use std::sync::Arc;

/// An immutable, ordered snapshot of uniformly-shaped records.
///
/// Populated once at load time from an already-materialized sequence (the
/// data layer's contract — no streaming, no lazy fetching) and never
/// mutated afterwards. Clones are cheap (`Arc`), record order is the load
/// order, and that order is what "original order" means for stable
/// filtering and tie-breaking.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    records: Arc<[R]>,
}

impl<R: Record> Collection<R> {
    /// Build a collection, rejecting duplicate record ids
    pub fn new(records: Vec<R>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ValidationError::DuplicateId {
                    collection: R::collection_name().to_string(),
                    id: record.id(),
                });
            }
        }
        tracing::debug!(
            collection = R::collection_name(),
            count = records.len(),
            "collection loaded"
        );
        Ok(Self {
            records: records.into(),
        })
    }

    /// Build a collection, validating each record first
    pub fn load(
        records: Vec<R>,
        validate: impl Fn(&R) -> Result<(), ValidationError>,
    ) -> Result<Self, ValidationError> {
        for record in &records {
            validate(record)?;
        }
        Self::new(records)
    }

    /// An empty collection
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Run the query engine over this collection
    pub fn query(
        &self,
        criteria: &FilterCriteria,
        sort_table: &SortTable,
        sort_key: &str,
        page: usize,
        page_size: usize,
    ) -> Result<QueryOutcome<R>, QueryError> {
        engine::query(&self.records, criteria, sort_table, sort_key, page, page_size)
    }
}
