//! Course listing records

use crate::core::error::ValidationError;
use crate::core::field::{FieldFormat, FieldValue};
use crate::core::record::Record;
use crate::store::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Course category, displayed and filtered by its menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    WebDevelopment,
    DataScience,
    Design,
    Marketing,
    Business,
    Programming,
    MobileDevelopment,
    Cybersecurity,
}

impl CourseCategory {
    /// Every category, in menu order
    pub const ALL: [CourseCategory; 8] = [
        CourseCategory::WebDevelopment,
        CourseCategory::DataScience,
        CourseCategory::Design,
        CourseCategory::Marketing,
        CourseCategory::Business,
        CourseCategory::Programming,
        CourseCategory::MobileDevelopment,
        CourseCategory::Cybersecurity,
    ];
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CourseCategory::WebDevelopment => "Web Development",
            CourseCategory::DataScience => "Data Science",
            CourseCategory::Design => "Design",
            CourseCategory::Marketing => "Marketing",
            CourseCategory::Business => "Business",
            CourseCategory::Programming => "Programming",
            CourseCategory::MobileDevelopment => "Mobile Development",
            CourseCategory::Cybersecurity => "Cybersecurity",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for CourseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| format!("unknown course category: '{}'", s))
    }
}

/// Course difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 4] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
        CourseLevel::Expert,
    ];
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
            CourseLevel::Expert => "Expert",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.to_string() == s)
            .ok_or_else(|| format!("unknown course level: '{}'", s))
    }
}

/// One course listing as shown by the discovery view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub category: CourseCategory,
    pub level: CourseLevel,
    pub price: f64,
    pub original_price: f64,
    pub rating: f64,
    pub students: u32,
    pub duration_hours: u32,
    pub tags: Vec<String>,
    pub bestseller: bool,
    pub thumbnail_url: Option<String>,
    pub updated: DateTime<Utc>,
}

impl Course {
    /// Validate a course record before it enters a collection
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
            "instructor",
            &FieldValue::String(self.instructor.clone()),
            validate::required(),
        );
        validate::check(
            &mut errors,
            "price",
            &FieldValue::Float(self.price),
            validate::non_negative(),
        );
        validate::check(
            &mut errors,
            "original_price",
            &FieldValue::Float(self.original_price),
            validate::non_negative(),
        );
        validate::check(
            &mut errors,
            "rating",
            &FieldValue::Float(self.rating),
            validate::within(0.0, 5.0),
        );
        validate::check(
            &mut errors,
            "thumbnail_url",
            &self
                .thumbnail_url
                .clone()
                .map(FieldValue::String)
                .unwrap_or(FieldValue::Null),
            validate::format(FieldFormat::Url),
        );
        validate::finish(errors)
    }
}

impl Record for Course {
    fn collection_name() -> &'static str {
        "courses"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "instructor", "description"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::String(self.title.clone())),
            "instructor" => Some(FieldValue::String(self.instructor.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "category" => Some(FieldValue::String(self.category.to_string())),
            "level" => Some(FieldValue::String(self.level.to_string())),
            "price" => Some(FieldValue::Float(self.price)),
            "original_price" => Some(FieldValue::Float(self.original_price)),
            "rating" => Some(FieldValue::Float(self.rating)),
            "students" => Some(FieldValue::Integer(self.students as i64)),
            "duration_hours" => Some(FieldValue::Integer(self.duration_hours as i64)),
            "bestseller" => Some(FieldValue::Boolean(self.bestseller)),
            "thumbnail_url" => Some(
                self.thumbnail_url
                    .clone()
                    .map(FieldValue::String)
                    .unwrap_or(FieldValue::Null),
            ),
            "updated" => Some(FieldValue::DateTime(self.updated)),
            _ => None,
        }
    }
}
