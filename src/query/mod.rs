//! The reusable collection query engine
//!
//! Every browsing view (course discovery, blog, forum, audit log, reviews)
//! drives the same pipeline: build a predicate from the active filter
//! criteria, apply a stable comparator, slice one page, report pagination
//! metadata. The modules here implement that pipeline over any [`Record`]
//! collection; per-view differences (searchable fields, buckets, sort
//! menus, page sizes) live in [`crate::config`].
//!
//! [`Record`]: crate::core::record::Record

pub mod bucket;
pub mod criteria;
pub mod engine;
pub mod predicate;
pub mod sort;

pub use bucket::Bucket;
pub use criteria::{ALL, Filter, FilterCriteria, SEARCH};
pub use engine::{QueryOutcome, query};
pub use sort::{Direction, SortSpec, SortTable};
