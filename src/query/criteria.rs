//! Filter criteria: the mapping from filter name to active constraint

use crate::query::bucket::Bucket;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// The sentinel menu value meaning "no constraint for this field"
pub const ALL: &str = "all";

/// Key under which the free-text search constraint is stored
pub const SEARCH: &str = "search";

/// One active constraint over a record
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match against the record's designated
    /// search fields; passes if any field contains the needle
    Search { text: String },

    /// Exact, case-sensitive match against a string field
    Equals { field: String, value: String },

    /// Numeric field falls within the named bucket
    Range { field: String, bucket: Bucket },

    /// Timestamp field at or after the cutoff. The cutoff is computed by
    /// the caller from a reference instant; the query layer never reads
    /// the clock.
    Since {
        field: String,
        cutoff: DateTime<Utc>,
    },
}

/// The current filter-criteria mapping for one view.
///
/// Entries are kept in insertion order (menu order). Assigning a sentinel
/// value — [`ALL`] or an empty selection for equality filters, a blank
/// needle for search — removes the entry instead of storing a predicate
/// that always passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    filters: IndexMap<String, Filter>,
}

impl FilterCriteria {
    /// Create an empty (match-everything) criteria mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a menu value is the "no constraint" sentinel
    pub fn is_sentinel(value: &str) -> bool {
        value.is_empty() || value == ALL
    }

    /// Set or clear the free-text search constraint.
    ///
    /// A blank (empty or whitespace-only) needle clears it.
    pub fn set_search(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.filters.shift_remove(SEARCH);
        } else {
            self.filters.insert(
                SEARCH.to_string(),
                Filter::Search {
                    text: trimmed.to_string(),
                },
            );
        }
    }

    /// Set or clear an equality constraint on `field`.
    ///
    /// The sentinel `"all"` (or an empty value) clears it.
    pub fn set_equals(&mut self, field: &str, value: &str) {
        if Self::is_sentinel(value) {
            self.filters.shift_remove(field);
        } else {
            self.filters.insert(
                field.to_string(),
                Filter::Equals {
                    field: field.to_string(),
                    value: value.to_string(),
                },
            );
        }
    }

    /// Set a range constraint on `field` using the given bucket
    pub fn set_range(&mut self, field: &str, bucket: Bucket) {
        self.filters.insert(
            field.to_string(),
            Filter::Range {
                field: field.to_string(),
                bucket,
            },
        );
    }

    /// Set a lower time bound on `field`
    pub fn set_since(&mut self, field: &str, cutoff: DateTime<Utc>) {
        self.filters.insert(
            field.to_string(),
            Filter::Since {
                field: field.to_string(),
                cutoff,
            },
        );
    }

    /// Remove the constraint stored under `name`, if any
    pub fn remove(&mut self, name: &str) -> Option<Filter> {
        self.filters.shift_remove(name)
    }

    /// Drop every constraint
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// True when no constraint is active (every record matches)
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of active constraints
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Iterate active constraints in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builder-style search constraint
    pub fn with_search(mut self, text: &str) -> Self {
        self.set_search(text);
        self
    }

    /// Builder-style equality constraint
    pub fn with_equals(mut self, field: &str, value: &str) -> Self {
        self.set_equals(field, value);
        self
    }

    /// Builder-style range constraint
    pub fn with_range(mut self, field: &str, bucket: Bucket) -> Self {
        self.set_range(field, bucket);
        self
    }
}
