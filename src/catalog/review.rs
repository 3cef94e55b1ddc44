//! Course review records and rating aggregation

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::store::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One student review of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub course_id: Uuid,
    pub user_name: String,
    /// 1-5 stars
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub helpful_count: u32,
    pub verified_purchase: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Validate a review before it enters a collection
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        validate::check(
            &mut errors,
            "user_name",
            &FieldValue::String(self.user_name.clone()),
            validate::required(),
        );
        validate::check(
            &mut errors,
            "rating",
            &FieldValue::Integer(self.rating as i64),
            validate::within(1.0, 5.0),
        );
        validate::check(
            &mut errors,
            "comment",
            &FieldValue::String(self.comment.clone()),
            validate::required(),
        );
        validate::finish(errors)
    }
}

impl Record for Review {
    fn collection_name() -> &'static str {
        "reviews"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "comment", "user_name"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "course_id" => Some(FieldValue::String(self.course_id.to_string())),
            "user_name" => Some(FieldValue::String(self.user_name.clone())),
            "rating" => Some(FieldValue::Integer(self.rating as i64)),
            "title" => Some(FieldValue::String(self.title.clone())),
            "comment" => Some(FieldValue::String(self.comment.clone())),
            "helpful_count" => Some(FieldValue::Integer(self.helpful_count as i64)),
            "verified_purchase" => Some(FieldValue::Boolean(self.verified_purchase)),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}

/// Aggregated rating statistics for one course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub total_reviews: usize,
    /// Mean rating, rounded to one decimal; 0.0 with no reviews
    pub average_rating: f64,
    /// Count per star, index 0 holding one-star reviews
    pub rating_distribution: [u32; 5],
}

impl RatingSummary {
    /// Summarize the reviews of one course.
    ///
    /// Reviews for other courses are skipped, so callers can pass the
    /// whole review collection.
    pub fn for_course<'a>(
        course_id: Uuid,
        reviews: impl IntoIterator<Item = &'a Review>,
    ) -> Self {
        let mut total = 0usize;
        let mut sum = 0u32;
        let mut distribution = [0u32; 5];

        for review in reviews {
            if review.course_id != course_id {
                continue;
            }
            total += 1;
            sum += review.rating as u32;
            if (1..=5).contains(&review.rating) {
                distribution[review.rating as usize - 1] += 1;
            }
        }

        let average = if total == 0 {
            0.0
        } else {
            (sum as f64 / total as f64 * 10.0).round() / 10.0
        };

        Self {
            total_reviews: total,
            average_rating: average,
            rating_distribution: distribution,
        }
    }
}
