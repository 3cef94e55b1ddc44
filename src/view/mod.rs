//! Per-view filter/sort/page state
//!
//! One [`ViewState`] per browsing view, passed explicitly to whoever
//! renders it — there is no global mutable state. The container owns the
//! three pieces of query state (criteria, sort key, current page),
//! validates mutations against the view's configuration, and reconciles
//! the page number with what the engine actually served.

use crate::config::{CatalogConfig, ViewConfig};
use crate::core::error::{LearnxResult, QueryError};
use crate::core::record::Record;
use crate::query::criteria::FilterCriteria;
use crate::query::engine::QueryOutcome;
use crate::query::sort::SortTable;
use crate::store::Collection;
use chrono::{DateTime, Utc};

/// Filter, sort, and pagination state for one view.
///
/// Created at view mount with defaults (no filters, the view's default
/// sort, page 1). Any filter mutation returns to page 1 — the result set
/// changed shape, so the old page number is meaningless. After
/// [`run`](ViewState::run), `current_page` always equals the page that was
/// actually served.
#[derive(Debug, Clone)]
pub struct ViewState {
    config: ViewConfig,
    sort_table: SortTable,
    criteria: FilterCriteria,
    sort_key: String,
    current_page: usize,
}

impl ViewState {
    /// Create view state with default values for the given view
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            sort_table: config.sort_table(),
            criteria: FilterCriteria::new(),
            sort_key: config.default_sort.clone(),
            current_page: 1,
            config: config.clone(),
        }
    }

    /// Look up a view in the catalog config and create its state
    pub fn for_view(config: &CatalogConfig, name: &str) -> LearnxResult<Self> {
        Ok(Self::new(config.view(name)?))
    }

    pub fn view_name(&self) -> &str {
        &self.config.name
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Set or clear the search text (blank clears); returns to page 1
    pub fn set_search(&mut self, text: &str) {
        self.criteria.set_search(text);
        self.current_page = 1;
    }

    /// Set or clear an equality filter; the sentinel `"all"` clears.
    ///
    /// The field must be declared by the view's configuration.
    pub fn set_equals(&mut self, field: &str, value: &str) -> Result<(), QueryError> {
        if !self.config.has_equals_filter(field) {
            return Err(QueryError::UnknownFilterField {
                view: self.config.name.clone(),
                field: field.to_string(),
            });
        }
        self.criteria.set_equals(field, value);
        self.current_page = 1;
        Ok(())
    }

    /// Select a range bucket by label; the sentinel `"all"` clears.
    pub fn set_range(&mut self, field: &str, label: &str) -> Result<(), QueryError> {
        if FilterCriteria::is_sentinel(label) {
            self.criteria.remove(field);
            self.current_page = 1;
            return Ok(());
        }
        let bucket = self.config.bucket(field, label).cloned().ok_or_else(|| {
            if self.config.range_filters.iter().any(|rf| rf.field == field) {
                QueryError::UnknownBucket {
                    field: field.to_string(),
                    label: label.to_string(),
                }
            } else {
                QueryError::UnknownFilterField {
                    view: self.config.name.clone(),
                    field: field.to_string(),
                }
            }
        })?;
        self.criteria.set_range(field, bucket);
        self.current_page = 1;
        Ok(())
    }

    /// Set or clear (`None`) a timestamp lower bound
    pub fn set_since(
        &mut self,
        field: &str,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<(), QueryError> {
        if !self.config.has_since_filter(field) {
            return Err(QueryError::UnknownFilterField {
                view: self.config.name.clone(),
                field: field.to_string(),
            });
        }
        match cutoff {
            Some(cutoff) => self.criteria.set_since(field, cutoff),
            None => {
                self.criteria.remove(field);
            }
        }
        self.current_page = 1;
        Ok(())
    }

    /// Select a sort key. Strict here, unlike the engine: the state
    /// container only accepts declared menu values.
    pub fn set_sort(&mut self, key: &str) -> Result<(), QueryError> {
        if !self.sort_table.contains(key) {
            return Err(QueryError::UnknownSortKey {
                view: self.config.name.clone(),
                key: key.to_string(),
            });
        }
        self.sort_key = key.to_string();
        Ok(())
    }

    /// Jump to a page (floored at 1; the upper clamp happens on run)
    pub fn goto_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.current_page += 1;
    }

    pub fn prev_page(&mut self) {
        self.current_page = (self.current_page - 1).max(1);
    }

    /// Reset filters, sort, and page to view-mount defaults
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.sort_key = self.config.default_sort.clone();
        self.current_page = 1;
    }

    /// Run the query engine over `collection` with this state.
    ///
    /// If filters shrank the result set below the current page, the
    /// engine's clamped page is persisted back so the user is never
    /// stranded on an empty page.
    pub fn run<R: Record>(
        &mut self,
        collection: &Collection<R>,
    ) -> Result<QueryOutcome<R>, QueryError> {
        let outcome = collection.query(
            &self.criteria,
            &self.sort_table,
            &self.sort_key,
            self.current_page,
            self.config.page_size,
        )?;

        if outcome.clamped_page != self.current_page {
            tracing::debug!(
                view = %self.config.name,
                requested = self.current_page,
                clamped = outcome.clamped_page,
                "page clamped after result set shrank"
            );
            self.current_page = outcome.clamped_page;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use uuid::Uuid;

    #[derive(Clone, Debug)]
    struct Item {
        id: Uuid,
        seq: i64,
        name: String,
        group: String,
    }

    impl Item {
        fn new(seq: i64, name: &str, group: &str) -> Self {
            Self {
                id: Uuid::new_v4(),
                seq,
                name: name.to_string(),
                group: group.to_string(),
            }
        }
    }

    impl Record for Item {
        fn collection_name() -> &'static str {
            "items"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn search_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "seq" => Some(FieldValue::Integer(self.seq)),
                "name" => Some(FieldValue::String(self.name.clone())),
                "group" => Some(FieldValue::String(self.group.clone())),
                _ => None,
            }
        }
    }

    fn config() -> ViewConfig {
        CatalogConfig::from_yaml_str(
            r#"
views:
  - name: items
    page_size: 10
    search_fields: [name]
    equals_filters: [group]
    range_filters:
      - field: seq
        buckets:
          - { label: low, le: 10 }
          - { label: high, gt: 10 }
    sorts:
      - { key: oldest, field: seq, direction: asc }
      - { key: newest, field: seq, direction: desc }
    default_sort: oldest
"#,
        )
        .unwrap()
        .view("items")
        .unwrap()
        .clone()
    }

    fn items(n: i64) -> Collection<Item> {
        let records = (1..=n)
            .map(|i| {
                let group = if i % 2 == 0 { "even" } else { "odd" };
                Item::new(i, &format!("item {}", i), group)
            })
            .collect();
        Collection::new(records).unwrap()
    }

    #[test]
    fn test_defaults_at_mount() {
        let state = ViewState::new(&config());
        assert!(state.criteria().is_empty());
        assert_eq!(state.sort_key(), "oldest");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_shrinking_filters_clamp_page_back() {
        // 25 items on page 3; filtering to 12 leaves 2 pages
        let collection = items(25);
        let mut state = ViewState::new(&config());

        state.goto_page(3);
        let outcome = state.run(&collection).unwrap();
        assert_eq!(outcome.clamped_page, 3);

        state.criteria.set_equals("group", "even"); // bypass page reset to exercise clamping
        let outcome = state.run(&collection).unwrap();
        assert_eq!(outcome.total_count, 12);
        assert_eq!(outcome.total_pages, 2);
        assert_eq!(outcome.clamped_page, 2);
        assert_eq!(state.current_page(), 2);
        assert_eq!(outcome.page_items.len(), 2);
    }

    #[test]
    fn test_filter_mutation_resets_page() {
        let mut state = ViewState::new(&config());
        state.goto_page(3);

        state.set_search("item");
        assert_eq!(state.current_page(), 1);

        state.goto_page(3);
        state.set_equals("group", "even").unwrap();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_undeclared_equals_field_rejected() {
        let mut state = ViewState::new(&config());
        let err = state.set_equals("color", "red").unwrap_err();
        assert!(matches!(err, QueryError::UnknownFilterField { .. }));
    }

    #[test]
    fn test_unknown_bucket_rejected() {
        let mut state = ViewState::new(&config());
        let err = state.set_range("seq", "medium").unwrap_err();
        assert!(matches!(err, QueryError::UnknownBucket { .. }));

        let err = state.set_range("name", "low").unwrap_err();
        assert!(matches!(err, QueryError::UnknownFilterField { .. }));
    }

    #[test]
    fn test_range_sentinel_clears() {
        let mut state = ViewState::new(&config());
        state.set_range("seq", "low").unwrap();
        assert_eq!(state.criteria().len(), 1);

        state.set_range("seq", "all").unwrap();
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn test_strict_sort_key_on_state() {
        let mut state = ViewState::new(&config());
        state.set_sort("newest").unwrap();
        assert_eq!(state.sort_key(), "newest");

        let err = state.set_sort("trending").unwrap_err();
        assert!(matches!(err, QueryError::UnknownSortKey { .. }));
        assert_eq!(state.sort_key(), "newest");
    }

    #[test]
    fn test_clear_filters_restores_defaults() {
        let mut state = ViewState::new(&config());
        state.set_search("item 2");
        state.set_equals("group", "even").unwrap();
        state.set_sort("newest").unwrap();
        state.goto_page(2);

        state.clear_filters();
        assert!(state.criteria().is_empty());
        assert_eq!(state.sort_key(), "oldest");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_prev_page_saturates_at_one() {
        let mut state = ViewState::new(&config());
        state.prev_page();
        assert_eq!(state.current_page(), 1);

        state.next_page();
        state.next_page();
        assert_eq!(state.current_page(), 3);
        state.prev_page();
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_empty_result_serves_page_one() {
        let collection = items(5);
        let mut state = ViewState::new(&config());
        state.set_search("no such item");

        let outcome = state.run(&collection).unwrap();
        assert!(outcome.page_items.is_empty());
        assert_eq!(outcome.total_pages, 1);
        assert_eq!(state.current_page(), 1);
    }
}
