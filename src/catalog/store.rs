//! Aggregated catalog store
//!
//! One handle over every browsable collection. Collections load
//! concurrently from their sources, are validated record-by-record, and
//! stay immutable for the life of the catalog.

use crate::catalog::audit::AuditEntry;
use crate::catalog::blog::BlogPost;
use crate::catalog::course::Course;
use crate::catalog::forum::ForumPost;
use crate::catalog::review::{RatingSummary, Review};
use crate::catalog::seed::SeedData;
use crate::core::error::LearnxResult;
use crate::store::{Collection, CollectionSource};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Serves the stock seed datasets as a data-layer supplier
#[derive(Debug, Clone)]
pub struct SeedSource {
    data: SeedData,
}

impl SeedSource {
    pub fn new() -> Self {
        Self {
            data: SeedData::build(),
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionSource<Course> for SeedSource {
    async fn fetch(&self) -> Result<Vec<Course>> {
        Ok(self.data.courses.clone())
    }
}

#[async_trait]
impl CollectionSource<ForumPost> for SeedSource {
    async fn fetch(&self) -> Result<Vec<ForumPost>> {
        Ok(self.data.forum_posts.clone())
    }
}

#[async_trait]
impl CollectionSource<BlogPost> for SeedSource {
    async fn fetch(&self) -> Result<Vec<BlogPost>> {
        Ok(self.data.blog_posts.clone())
    }
}

#[async_trait]
impl CollectionSource<AuditEntry> for SeedSource {
    async fn fetch(&self) -> Result<Vec<AuditEntry>> {
        Ok(self.data.audit_entries.clone())
    }
}

#[async_trait]
impl CollectionSource<Review> for SeedSource {
    async fn fetch(&self) -> Result<Vec<Review>> {
        Ok(self.data.reviews.clone())
    }
}

/// Every browsable collection of the platform
#[derive(Clone)]
pub struct Catalog {
    pub courses: Collection<Course>,
    pub forum_posts: Collection<ForumPost>,
    pub blog_posts: Collection<BlogPost>,
    pub audit_entries: Collection<AuditEntry>,
    pub reviews: Collection<Review>,
}

impl Catalog {
    /// Load every collection concurrently from one supplier
    pub async fn load<S>(source: &S) -> LearnxResult<Self>
    where
        S: CollectionSource<Course>
            + CollectionSource<ForumPost>
            + CollectionSource<BlogPost>
            + CollectionSource<AuditEntry>
            + CollectionSource<Review>,
    {
        let (courses, forum_posts, blog_posts, audit_entries, reviews) = futures::try_join!(
            CollectionSource::<Course>::fetch(source),
            CollectionSource::<ForumPost>::fetch(source),
            CollectionSource::<BlogPost>::fetch(source),
            CollectionSource::<AuditEntry>::fetch(source),
            CollectionSource::<Review>::fetch(source),
        )?;

        let catalog = Self {
            courses: Collection::load(courses, Course::validate)?,
            forum_posts: Collection::load(forum_posts, ForumPost::validate)?,
            blog_posts: Collection::load(blog_posts, BlogPost::validate)?,
            audit_entries: Collection::load(audit_entries, AuditEntry::validate)?,
            reviews: Collection::load(reviews, Review::validate)?,
        };

        tracing::info!(
            courses = catalog.courses.len(),
            forum_posts = catalog.forum_posts.len(),
            blog_posts = catalog.blog_posts.len(),
            audit_entries = catalog.audit_entries.len(),
            reviews = catalog.reviews.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Load the stock seed catalog
    pub async fn seeded() -> LearnxResult<Self> {
        Self::load(&SeedSource::new()).await
    }

    /// Aggregate rating statistics for one course
    pub fn rating_summary(&self, course_id: Uuid) -> RatingSummary {
        RatingSummary::for_course(course_id, self.reviews.iter())
    }
}
