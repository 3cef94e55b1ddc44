//! Discussion forum post records

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::session::Role;
use crate::store::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Forum category slugs, in menu order
pub const CATEGORIES: &[&str] = &[
    "general",
    "web-dev",
    "data-science",
    "design",
    "career",
    "help",
];

/// Post author summary shown next to each post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub role: Role,
    pub reputation: u32,
}

/// One discussion thread in the forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: PostAuthor,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: u32,
    pub dislikes: u32,
    pub replies: u32,
    pub views: u32,
    pub pinned: bool,
    pub solved: bool,
}

impl ForumPost {
    /// Derived status used by the status dropdown: a solved thread is
    /// "solved", a thread nobody answered is "unanswered", the rest are
    /// "open"
    pub fn status(&self) -> &'static str {
        if self.solved {
            "solved"
        } else if self.replies == 0 {
            "unanswered"
        } else {
            "open"
        }
    }

    /// Validate a forum post before it enters a collection
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
            "content",
            &FieldValue::String(self.content.clone()),
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

impl Record for ForumPost {
    fn collection_name() -> &'static str {
        "forum_posts"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "content"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::String(self.title.clone())),
            "content" => Some(FieldValue::String(self.content.clone())),
            "author_name" => Some(FieldValue::String(self.author.name.clone())),
            "author_role" => Some(FieldValue::String(self.author.role.to_string())),
            "reputation" => Some(FieldValue::Integer(self.author.reputation as i64)),
            "category" => Some(FieldValue::String(self.category.clone())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            "updated_at" => Some(FieldValue::DateTime(self.updated_at)),
            "likes" => Some(FieldValue::Integer(self.likes as i64)),
            "dislikes" => Some(FieldValue::Integer(self.dislikes as i64)),
            "replies" => Some(FieldValue::Integer(self.replies as i64)),
            "views" => Some(FieldValue::Integer(self.views as i64)),
            "pinned" => Some(FieldValue::Boolean(self.pinned)),
            "solved" => Some(FieldValue::Boolean(self.solved)),
            "status" => Some(FieldValue::String(self.status().to_string())),
            _ => None,
        }
    }
}
