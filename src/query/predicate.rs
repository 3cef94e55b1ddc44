//! Predicate builder: turns filter criteria into a record predicate

use crate::core::record::Record;
use crate::query::criteria::{Filter, FilterCriteria};

/// Evaluate the composed predicate for one record.
///
/// Every active constraint must pass (logical AND); empty criteria match
/// everything. Pure function of (criteria, record) — no side effects, and
/// never an error: a designated field that is absent or of the wrong kind
/// simply fails to match.
pub fn matches<R: Record>(criteria: &FilterCriteria, record: &R) -> bool {
    criteria
        .iter()
        .all(|(_, filter)| matches_one(filter, record))
}

fn matches_one<R: Record>(filter: &Filter, record: &R) -> bool {
    match filter {
        Filter::Search { text } => {
            let needle = text.to_lowercase();
            R::search_fields().iter().any(|field| {
                record
                    .field_value(field)
                    .and_then(|v| v.as_str().map(|s| s.to_lowercase().contains(&needle)))
                    .unwrap_or(false)
            })
        }
        Filter::Equals { field, value } => record
            .field_value(field)
            .and_then(|v| v.as_str().map(|s| s == value))
            .unwrap_or(false),
        Filter::Range { field, bucket } => record
            .field_value(field)
            .and_then(|v| v.as_f64())
            .map(|n| bucket.contains(n))
            .unwrap_or(false),
        Filter::Since { field, cutoff } => record
            .field_value(field)
            .and_then(|v| v.as_datetime())
            .map(|ts| ts >= *cutoff)
            .unwrap_or(false),
    }
}
