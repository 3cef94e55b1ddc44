//! The query engine: filter, sort, paginate

use crate::core::error::QueryError;
use crate::core::record::Record;
use crate::query::criteria::FilterCriteria;
use crate::query::predicate;
use crate::query::sort::{self, SortTable};

/// The paginated, sorted, filtered view of a collection.
///
/// All pagination metadata the caller needs to render page controls and
/// reconcile its own page state. If `clamped_page` differs from the
/// requested page, the caller is expected to persist it back (see
/// `ViewState::run`), so a user is never stranded on a page that no
/// longer exists after filters shrink the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<R> {
    /// The records of the clamped page, in sorted order
    pub page_items: Vec<R>,

    /// Number of records after filtering
    pub total_count: usize,

    /// Number of pages; at least 1 even for an empty result (the "no
    /// results" page exists, it is simply empty)
    pub total_pages: usize,

    /// The requested page constrained to `[1, total_pages]`
    pub clamped_page: usize,
}

impl<R> QueryOutcome<R> {
    /// Whether a page follows the clamped page
    pub fn has_next(&self) -> bool {
        self.clamped_page < self.total_pages
    }

    /// Whether a page precedes the clamped page
    pub fn has_prev(&self) -> bool {
        self.clamped_page > 1
    }
}

/// Produce the paginated, sorted, filtered view of `records`.
///
/// The engine is a pure, stateless function: all state (criteria, sort
/// key, page) lives with the caller, and identical arguments always
/// produce identical outcomes.
///
/// - Filtering is stable: records the predicate keeps stay in input order.
/// - Sorting is stable: equal sort keys keep their relative input order.
/// - `sort_key` values missing from the table fall back to the table's
///   default comparator (logged by [`SortTable::resolve`]).
///
/// # Errors
///
/// `page_size == 0` is a caller contract violation and returns
/// [`QueryError::InvalidPageSize`]; there is no silent fallback value.
pub fn query<R: Record>(
    records: &[R],
    criteria: &FilterCriteria,
    sort_table: &SortTable,
    sort_key: &str,
    page: usize,
    page_size: usize,
) -> Result<QueryOutcome<R>, QueryError> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize { page_size });
    }

    let filtered: Vec<R> = records
        .iter()
        .filter(|record| predicate::matches(criteria, *record))
        .cloned()
        .collect();

    let sorted = match sort_table.resolve(sort_key) {
        Some(spec) => sort::apply(spec, filtered),
        None => {
            tracing::warn!(
                collection = R::collection_name(),
                "sort table has no default comparator, keeping filtered order"
            );
            filtered
        }
    };

    let total_count = sorted.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let clamped_page = page.clamp(1, total_pages);

    let start = (clamped_page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let page_items = if start < total_count {
        sorted[start..end].to_vec()
    } else {
        Vec::new()
    };

    tracing::debug!(
        collection = R::collection_name(),
        total_count,
        total_pages,
        clamped_page,
        "query evaluated"
    );

    Ok(QueryOutcome {
        page_items,
        total_count,
        total_pages,
        clamped_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::query::sort::Direction;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq)]
    struct Post {
        id: Uuid,
        seq: i64,
        title: String,
    }

    impl Post {
        fn new(seq: i64) -> Self {
            Self {
                id: Uuid::new_v4(),
                seq,
                title: format!("Post {}", seq),
            }
        }
    }

    impl Record for Post {
        fn collection_name() -> &'static str {
            "posts"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn search_fields() -> &'static [&'static str] {
            &["title"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "seq" => Some(FieldValue::Integer(self.seq)),
                "title" => Some(FieldValue::String(self.title.clone())),
                _ => None,
            }
        }
    }

    fn table() -> SortTable {
        SortTable::new("oldest").with("oldest", "seq", Direction::Ascending)
    }

    fn posts(n: i64) -> Vec<Post> {
        (1..=n).map(Post::new).collect()
    }

    #[test]
    fn test_zero_page_size_is_an_error() {
        let err = query(
            &posts(3),
            &FilterCriteria::new(),
            &table(),
            "oldest",
            1,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidPageSize { page_size: 0 }));
    }

    #[test]
    fn test_twenty_five_posts_page_three() {
        // 25 records, page size 10, page 3: records 21-25
        let outcome = query(
            &posts(25),
            &FilterCriteria::new(),
            &table(),
            "oldest",
            3,
            10,
        )
        .unwrap();

        assert_eq!(outcome.total_count, 25);
        assert_eq!(outcome.total_pages, 3);
        assert_eq!(outcome.clamped_page, 3);
        assert_eq!(outcome.page_items.len(), 5);
        assert_eq!(outcome.page_items[0].seq, 21);
        assert_eq!(outcome.page_items[4].seq, 25);
        assert!(!outcome.has_next());
        assert!(outcome.has_prev());
    }

    #[test]
    fn test_overshooting_page_is_clamped() {
        // 12 records at page size 10 leave 2 pages; page 5 clamps to 2
        let outcome = query(
            &posts(12),
            &FilterCriteria::new(),
            &table(),
            "oldest",
            5,
            10,
        )
        .unwrap();

        assert_eq!(outcome.total_pages, 2);
        assert_eq!(outcome.clamped_page, 2);
        assert_eq!(outcome.page_items.len(), 2);
        assert_eq!(outcome.page_items[0].seq, 11);
        assert_eq!(outcome.page_items[1].seq, 12);
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let outcome = query(
            &posts(5),
            &FilterCriteria::new(),
            &table(),
            "oldest",
            0,
            10,
        )
        .unwrap();
        assert_eq!(outcome.clamped_page, 1);
        assert_eq!(outcome.page_items.len(), 5);
    }

    #[test]
    fn test_empty_collection_has_one_empty_page() {
        let outcome = query(&[] as &[Post], &FilterCriteria::new(), &table(), "oldest", 3, 10).unwrap();

        assert!(outcome.page_items.is_empty());
        assert_eq!(outcome.total_count, 0);
        assert_eq!(outcome.total_pages, 1);
        assert_eq!(outcome.clamped_page, 1);
        assert!(!outcome.has_next());
        assert!(!outcome.has_prev());
    }

    #[test]
    fn test_all_filtered_out_behaves_like_empty() {
        let criteria = FilterCriteria::new().with_search("no such post anywhere");
        let outcome = query(&posts(25), &criteria, &table(), "oldest", 2, 10).unwrap();

        assert!(outcome.page_items.is_empty());
        assert_eq!(outcome.total_pages, 1);
        assert_eq!(outcome.clamped_page, 1);
    }

    #[test]
    fn test_identical_arguments_identical_results() {
        let records = posts(25);
        let criteria = FilterCriteria::new().with_search("post 1");

        let a = query(&records, &criteria, &table(), "oldest", 1, 10).unwrap();
        let b = query(&records, &criteria, &table(), "oldest", 1, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_sort_key_uses_default() {
        let outcome = query(
            &posts(3),
            &FilterCriteria::new(),
            &table(),
            "trending",
            1,
            10,
        )
        .unwrap();
        assert_eq!(outcome.page_items[0].seq, 1);
    }

    #[test]
    fn test_malformed_table_keeps_filtered_order() {
        let empty_table = SortTable::new("missing");
        let outcome = query(
            &posts(3),
            &FilterCriteria::new(),
            &empty_table,
            "missing",
            1,
            10,
        )
        .unwrap();
        let seqs: Vec<_> = outcome.page_items.iter().map(|p| p.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }
}
