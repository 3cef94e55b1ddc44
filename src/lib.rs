//! # LearnX Core
//!
//! The data core of the LearnX learning platform: typed record
//! collections and the one query engine every browsing view shares.
//!
//! ## Features
//!
//! - **One Query Engine**: filter, stable sort, and paginate any record
//!   collection with identical semantics across views
//! - **Per-View Configuration**: search fields, filter menus, buckets,
//!   sort options, and page sizes are data, not code — YAML-loadable with
//!   shipped defaults
//! - **Explicit View State**: one state container per view, with
//!   clamped-page reconciliation so filters can never strand a user on an
//!   empty page
//! - **Immutable Collections**: records load once, validate once, and
//!   never change underneath a query
//! - **Typed Errors**: precondition violations are explicit errors, not
//!   silent fallbacks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use learnx::prelude::*;
//!
//! let catalog = Catalog::seeded().await?;
//! let config = CatalogConfig::default_config();
//!
//! let mut discovery = ViewState::for_view(&config, "discovery")?;
//! discovery.set_search("react");
//! discovery.set_equals("category", "Web Development")?;
//! discovery.set_range("price", "$50-$100")?;
//! discovery.set_sort("rating")?;
//!
//! let outcome = discovery.run(&catalog.courses)?;
//! println!(
//!     "{} of {} courses (page {}/{})",
//!     outcome.page_items.len(),
//!     outcome.total_count,
//!     outcome.clamped_page,
//!     outcome.total_pages,
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod query;
pub mod session;
pub mod store;
pub mod tasks;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{LearnxError, LearnxResult, QueryError, TaskError, ValidationError},
        field::{FieldFormat, FieldValue},
        record::Record,
    };

    // === Query engine ===
    pub use crate::query::{
        ALL, Bucket, Direction, Filter, FilterCriteria, QueryOutcome, SortSpec, SortTable, query,
    };

    // === Configuration ===
    pub use crate::config::{CatalogConfig, RangeFilter, SortOption, ViewConfig};

    // === Storage ===
    pub use crate::store::{Collection, CollectionSource};

    // === Catalog ===
    pub use crate::catalog::{
        AuditEntry, AuditStatus, BlogPost, Catalog, Course, CourseCategory, CourseLevel,
        DateRange, ForumPost, RatingSummary, Review, SeedSource, Severity,
    };

    // === View state ===
    pub use crate::view::ViewState;

    // === Session ===
    pub use crate::session::{
        FileBackend, MemoryBackend, Role, Session, SessionBackend,
    };

    // === Tasks ===
    pub use crate::tasks::{
        CancelHandle, CancelSignal, PaymentReceipt, cancellation, process_payment, sign_in,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
