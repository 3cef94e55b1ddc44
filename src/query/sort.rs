//! Sort keys, comparators, and per-view sort tables

use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction for a comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// One comparator: a record field and a direction.
///
/// Ties are never broken by a secondary key; the stable sort keeps equal
/// records in their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Compare two records under this spec
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let va = a.field_value(&self.field).unwrap_or(FieldValue::Null);
        let vb = b.field_value(&self.field).unwrap_or(FieldValue::Null);
        match self.direction {
            Direction::Ascending => va.compare(&vb),
            Direction::Descending => vb.compare(&va),
        }
    }
}

/// The sort options one view offers, in menu order, with a default key.
///
/// An unknown key resolves to the default comparator rather than failing —
/// the permissive fallthrough every original view had — but the fallback
/// is logged so it does not pass silently. Callers that want strict
/// behavior can check [`SortTable::contains`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct SortTable {
    options: IndexMap<String, SortSpec>,
    default_key: String,
}

impl SortTable {
    /// Create a table with the given default key (insert it with [`with`])
    ///
    /// [`with`]: SortTable::with
    pub fn new(default_key: impl Into<String>) -> Self {
        Self {
            options: IndexMap::new(),
            default_key: default_key.into(),
        }
    }

    /// Builder-style option registration
    pub fn with(mut self, key: &str, field: &str, direction: Direction) -> Self {
        self.options
            .insert(key.to_string(), SortSpec::new(field, direction));
        self
    }

    /// The key applied when none (or an unknown one) is selected
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Whether `key` is a declared option
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Option keys in menu order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// True when the table declares no options at all
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve a key to its comparator, falling back to the default.
    ///
    /// Returns `None` only for a malformed table whose default key is
    /// itself missing; the engine then leaves the filtered order as-is.
    pub fn resolve(&self, key: &str) -> Option<&SortSpec> {
        if let Some(spec) = self.options.get(key) {
            return Some(spec);
        }
        tracing::warn!(
            sort_key = key,
            default = %self.default_key,
            "unknown sort key, falling back to default"
        );
        self.options.get(&self.default_key)
    }
}

/// Stable sort of a record sequence under one comparator.
///
/// `Vec::sort_by` is stable: records comparing equal keep their relative
/// input order, so repeated queries never visibly reorder ties.
pub fn apply<R: Record>(spec: &SortSpec, mut records: Vec<R>) -> Vec<R> {
    records.sort_by(|a, b| spec.compare(a, b));
    records
}
