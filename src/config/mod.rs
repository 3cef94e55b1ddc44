//! Per-view configuration loading and management
//!
//! Each browsing view supplies its own field mapping — which fields the
//! search scans, which equality and range filters exist, which sort
//! options the menu offers, how large a page is — instead of
//! reimplementing the query pipeline. [`CatalogConfig::default_config`]
//! ships the platform's stock views; deployments can override them with a
//! YAML document:
//!
//! ```yaml
//! views:
//!   - name: discovery
//!     page_size: 9
//!     search_fields: [title, instructor, description]
//!     equals_filters: [category, level]
//!     range_filters:
//!       - field: price
//!         buckets:
//!           - { label: Free, eq: 0 }
//!           - { label: "$0-$50", le: 50 }
//!           - { label: "$50-$100", gt: 50, le: 100 }
//!           - { label: "$100+", gt: 100 }
//!     sorts:
//!       - { key: popularity, field: students, direction: desc }
//!       - { key: rating, field: rating, direction: desc }
//!     default_sort: popularity
//! ```

use crate::core::error::{ConfigError, LearnxResult};
use crate::query::bucket::Bucket;
use crate::query::sort::{Direction, SortTable};
use serde::{Deserialize, Serialize};

/// One entry of a view's sort menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortOption {
    /// Menu value (e.g., "price_low")
    pub key: String,

    /// Record field the comparator reads
    pub field: String,

    /// Sort direction
    pub direction: Direction,
}

/// A range filter: one numeric field and its named buckets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeFilter {
    pub field: String,
    pub buckets: Vec<Bucket>,
}

/// Configuration for one browsing view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name (e.g., "discovery", "audit")
    pub name: String,

    /// Fixed page size for this view
    pub page_size: usize,

    /// Text fields scanned by the search box, in match order
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Fields offering an exact-match dropdown (with the "all" sentinel)
    #[serde(default)]
    pub equals_filters: Vec<String>,

    /// Numeric fields offering named-bucket dropdowns
    #[serde(default)]
    pub range_filters: Vec<RangeFilter>,

    /// Timestamp fields offering a "since" window
    #[serde(default)]
    pub since_filters: Vec<String>,

    /// Sort menu entries, in menu order
    pub sorts: Vec<SortOption>,

    /// Key applied by default and on unknown-key fallback
    pub default_sort: String,
}

impl ViewConfig {
    /// Build the sort table for this view
    pub fn sort_table(&self) -> SortTable {
        let mut table = SortTable::new(&self.default_sort);
        for option in &self.sorts {
            table = table.with(&option.key, &option.field, option.direction);
        }
        table
    }

    /// Whether `field` has a declared equality filter
    pub fn has_equals_filter(&self, field: &str) -> bool {
        self.equals_filters.iter().any(|f| f == field)
    }

    /// Whether `field` has a declared since filter
    pub fn has_since_filter(&self, field: &str) -> bool {
        self.since_filters.iter().any(|f| f == field)
    }

    /// Look up a bucket by range-filter field and label
    pub fn bucket(&self, field: &str, label: &str) -> Option<&Bucket> {
        self.range_filters
            .iter()
            .find(|rf| rf.field == field)
            .and_then(|rf| rf.buckets.iter().find(|b| b.label == label))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                view: self.name.clone(),
                field: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.sorts.is_empty() {
            return Err(ConfigError::InvalidValue {
                view: self.name.clone(),
                field: "sorts".to_string(),
                message: "at least one sort option is required".to_string(),
            });
        }
        if !self.sorts.iter().any(|s| s.key == self.default_sort) {
            return Err(ConfigError::InvalidValue {
                view: self.name.clone(),
                field: "default_sort".to_string(),
                message: format!("'{}' is not a declared sort option", self.default_sort),
            });
        }
        for range in &self.range_filters {
            for (i, bucket) in range.buckets.iter().enumerate() {
                if range.buckets[..i].iter().any(|b| b.label == bucket.label) {
                    return Err(ConfigError::InvalidValue {
                        view: self.name.clone(),
                        field: range.field.clone(),
                        message: format!("duplicate bucket label '{}'", bucket.label),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Complete configuration for the catalog's browsing views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub views: Vec<ViewConfig>,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> LearnxResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        tracing::info!(path, views = config.views.len(), "catalog config loaded");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> LearnxResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a view by name
    pub fn view(&self, name: &str) -> Result<&ViewConfig, ConfigError> {
        self.views
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| ConfigError::UnknownView {
                name: name.to_string(),
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (i, view) in self.views.iter().enumerate() {
            if self.views[..i].iter().any(|v| v.name == view.name) {
                return Err(ConfigError::InvalidValue {
                    view: view.name.clone(),
                    field: "name".to_string(),
                    message: "duplicate view name".to_string(),
                });
            }
            view.validate()?;
        }
        Ok(())
    }

    /// The platform's stock views, mirroring the shipped UI menus
    pub fn default_config() -> Self {
        let sort = |key: &str, field: &str, direction: Direction| SortOption {
            key: key.to_string(),
            field: field.to_string(),
            direction,
        };

        Self {
            views: vec![
                ViewConfig {
                    name: "discovery".to_string(),
                    page_size: 9,
                    search_fields: vec![
                        "title".to_string(),
                        "instructor".to_string(),
                        "description".to_string(),
                    ],
                    equals_filters: vec!["category".to_string(), "level".to_string()],
                    range_filters: vec![RangeFilter {
                        field: "price".to_string(),
                        buckets: vec![
                            Bucket::new("Free").exactly(0.0),
                            Bucket::new("$0-$50").at_most(50.0),
                            Bucket::new("$50-$100").above(50.0).at_most(100.0),
                            Bucket::new("$100+").above(100.0),
                        ],
                    }],
                    since_filters: vec![],
                    sorts: vec![
                        sort("popularity", "students", Direction::Descending),
                        sort("rating", "rating", Direction::Descending),
                        sort("newest", "updated", Direction::Descending),
                        sort("price_low", "price", Direction::Ascending),
                        sort("price_high", "price", Direction::Descending),
                    ],
                    default_sort: "popularity".to_string(),
                },
                ViewConfig {
                    name: "forum".to_string(),
                    page_size: 10,
                    search_fields: vec!["title".to_string(), "content".to_string()],
                    equals_filters: vec!["category".to_string(), "status".to_string()],
                    range_filters: vec![],
                    since_filters: vec![],
                    sorts: vec![
                        sort("recent", "created_at", Direction::Descending),
                        sort("popular", "views", Direction::Descending),
                    ],
                    default_sort: "recent".to_string(),
                },
                ViewConfig {
                    name: "blog".to_string(),
                    page_size: 6,
                    search_fields: vec!["title".to_string(), "excerpt".to_string()],
                    equals_filters: vec!["category".to_string()],
                    range_filters: vec![],
                    since_filters: vec![],
                    sorts: vec![
                        sort("newest", "publish_date", Direction::Descending),
                        sort("popular", "views", Direction::Descending),
                    ],
                    default_sort: "newest".to_string(),
                },
                ViewConfig {
                    name: "audit".to_string(),
                    page_size: 10,
                    search_fields: vec![
                        "details".to_string(),
                        "action".to_string(),
                        "user_name".to_string(),
                    ],
                    equals_filters: vec!["action".to_string(), "user".to_string()],
                    range_filters: vec![],
                    since_filters: vec!["timestamp".to_string()],
                    sorts: vec![sort("newest", "timestamp", Direction::Descending)],
                    default_sort: "newest".to_string(),
                },
                ViewConfig {
                    name: "reviews".to_string(),
                    page_size: 10,
                    search_fields: vec![
                        "title".to_string(),
                        "comment".to_string(),
                        "user_name".to_string(),
                    ],
                    equals_filters: vec![],
                    range_filters: vec![],
                    since_filters: vec![],
                    sorts: vec![
                        sort("date_new", "created_at", Direction::Descending),
                        sort("date_old", "created_at", Direction::Ascending),
                        sort("rating_high", "rating", Direction::Descending),
                        sort("rating_low", "rating", Direction::Ascending),
                        sort("helpful", "helpful_count", Direction::Descending),
                    ],
                    default_sort: "date_new".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CatalogConfig::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.views.len(), 5);
    }

    #[test]
    fn test_default_discovery_view() {
        let config = CatalogConfig::default_config();
        let discovery = config.view("discovery").unwrap();

        assert_eq!(discovery.page_size, 9);
        assert!(discovery.has_equals_filter("category"));
        assert!(discovery.has_equals_filter("level"));
        assert!(!discovery.has_equals_filter("price"));

        let table = discovery.sort_table();
        assert_eq!(table.default_key(), "popularity");
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(
            keys,
            vec!["popularity", "rating", "newest", "price_low", "price_high"]
        );
    }

    #[test]
    fn test_bucket_lookup() {
        let config = CatalogConfig::default_config();
        let discovery = config.view("discovery").unwrap();

        let bucket = discovery.bucket("price", "$50-$100").unwrap();
        assert!(!bucket.contains(50.0));
        assert!(bucket.contains(75.0));
        assert!(bucket.contains(100.0));

        assert!(discovery.bucket("price", "$200+").is_none());
        assert!(discovery.bucket("rating", "Free").is_none());
    }

    #[test]
    fn test_unknown_view_errors() {
        let config = CatalogConfig::default_config();
        let err = config.view("dashboard").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_VIEW");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = r#"
views:
  - name: discovery
    page_size: 9
    search_fields: [title, instructor, description]
    equals_filters: [category, level]
    range_filters:
      - field: price
        buckets:
          - { label: Free, eq: 0 }
          - { label: "$0-$50", le: 50 }
          - { label: "$50-$100", gt: 50, le: 100 }
          - { label: "$100+", gt: 100 }
    sorts:
      - { key: popularity, field: students, direction: desc }
      - { key: price_low, field: price, direction: asc }
    default_sort: popularity
"#;
        let config = CatalogConfig::from_yaml_str(yaml).unwrap();
        let view = config.view("discovery").unwrap();
        assert_eq!(view.sorts.len(), 2);
        assert!(view.bucket("price", "Free").unwrap().contains(0.0));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let yaml = r#"
views:
  - name: broken
    page_size: 0
    sorts:
      - { key: newest, field: created_at, direction: desc }
    default_sort: newest
"#;
        let err = CatalogConfig::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");
    }

    #[test]
    fn test_default_sort_must_be_declared() {
        let yaml = r#"
views:
  - name: broken
    page_size: 10
    sorts:
      - { key: newest, field: created_at, direction: desc }
    default_sort: popularity
"#;
        assert!(CatalogConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_duplicate_view_names_rejected() {
        let yaml = r#"
views:
  - name: blog
    page_size: 6
    sorts: [{ key: newest, field: publish_date, direction: desc }]
    default_sort: newest
  - name: blog
    page_size: 6
    sorts: [{ key: newest, field: publish_date, direction: desc }]
    default_sort: newest
"#;
        assert!(CatalogConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_duplicate_bucket_labels_rejected() {
        let yaml = r#"
views:
  - name: broken
    page_size: 10
    range_filters:
      - field: price
        buckets:
          - { label: Free, eq: 0 }
          - { label: Free, le: 50 }
    sorts: [{ key: newest, field: created_at, direction: desc }]
    default_sort: newest
"#;
        assert!(CatalogConfig::from_yaml_str(yaml).is_err());
    }
}
