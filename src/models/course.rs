use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course as the scoring engine sees it: a snapshot record with its
/// popularity already materialized. Immutable for the duration of a
/// scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique course identifier (e.g., "PYT")
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Precomputed demand signal, non-negative
    pub popularity: f64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// A course as held by the document store.
///
/// `popularity` is optional here: a stored document may carry an explicit
/// precomputed value, otherwise the store derives it from enrollment counts
/// when it materializes a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseDocument {
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

impl CourseDocument {
    /// Materializes the snapshot record, falling back to the enrollment
    /// count when no explicit popularity was stored.
    pub fn materialize(&self, enrollment_count: u64) -> Course {
        Course {
            course_id: self.course_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            popularity: self.popularity.unwrap_or(enrollment_count as f64),
            is_published: self.is_published,
            created_at: self.created_at,
        }
    }
}
