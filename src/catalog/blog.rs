//! Blog post records

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::store::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog categories, in menu order
pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Programming",
    "Study Tips",
    "Education",
    "Career",
    "Data Science",
];

/// One article on the platform blog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub read_minutes: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub views: u32,
    pub comments: u32,
    /// The hero article pinned above the grid
    pub featured: bool,
}

impl BlogPost {
    /// Validate a blog post before it enters a collection
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        validate::check(
            &mut errors,
            "title",
            &FieldValue::String(self.title.clone()),
            validate::required(),
        );
        validate::check(
            &mut errors,
            "excerpt",
            &FieldValue::String(self.excerpt.clone()),
            validate::required(),
        );
        validate::check(
            &mut errors,
            "category",
            &FieldValue::String(self.category.clone()),
            validate::one_of(CATEGORIES),
        );
        validate::finish(errors)
    }
}

impl Record for BlogPost {
    fn collection_name() -> &'static str {
        "blog_posts"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "excerpt"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::String(self.title.clone())),
            "excerpt" => Some(FieldValue::String(self.excerpt.clone())),
            "author" => Some(FieldValue::String(self.author.clone())),
            "publish_date" => Some(FieldValue::DateTime(self.publish_date)),
            "read_minutes" => Some(FieldValue::Integer(self.read_minutes as i64)),
            "category" => Some(FieldValue::String(self.category.clone())),
            "views" => Some(FieldValue::Integer(self.views as i64)),
            "comments" => Some(FieldValue::Integer(self.comments as i64)),
            "featured" => Some(FieldValue::Boolean(self.featured)),
            _ => None,
        }
    }
}
