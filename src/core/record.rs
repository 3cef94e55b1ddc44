//! Record trait defining the core abstraction for all displayed collections

use crate::core::field::FieldValue;
use uuid::Uuid;

/// One item in a displayed collection (course, post, audit entry).
///
/// Records are immutable once loaded into a collection; the query engine
/// only ever reads them. Every record exposes:
/// - a collection name used for logging and store lookups,
/// - a unique identifier,
/// - the designated text fields the search predicate scans,
/// - dynamic field access for the generic predicates and comparators.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural collection name (e.g., "courses", "forum_posts")
    fn collection_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// The text fields scanned by the search predicate, in match order
    fn search_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name.
    ///
    /// Returns `None` for unknown field names. Predicates and comparators
    /// treat `None` like [`FieldValue::Null`]: non-matching for filters,
    /// ordered first for sorts — never an error.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: Uuid,
        title: String,
        score: i64,
    }

    impl Record for TestRecord {
        fn collection_name() -> &'static str {
            "test_records"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn search_fields() -> &'static [&'static str] {
            &["title"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "title" => Some(FieldValue::String(self.title.clone())),
                "score" => Some(FieldValue::Integer(self.score)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_field_access() {
        let record = TestRecord {
            id: Uuid::new_v4(),
            title: "Intro".to_string(),
            score: 7,
        };

        assert_eq!(
            record.field_value("title"),
            Some(FieldValue::String("Intro".to_string()))
        );
        assert_eq!(record.field_value("score"), Some(FieldValue::Integer(7)));
        assert_eq!(record.field_value("missing"), None);
    }

    #[test]
    fn test_collection_metadata() {
        assert_eq!(TestRecord::collection_name(), "test_records");
        assert_eq!(TestRecord::search_fields(), &["title"]);
    }
}
