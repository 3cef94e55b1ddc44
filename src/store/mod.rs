//! Collection storage: immutable snapshots, suppliers, load-time validation

pub mod collection;
pub mod source;
pub mod validate;

pub use collection::Collection;
pub use source::CollectionSource;
