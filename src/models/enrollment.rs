use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An enrollment record linking a student to a course.
///
/// The (student_id, course_id) pair is unique; the store enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub enrollment_id: String,
    pub student_id: String,
    pub course_id: String,
    #[serde(default = "Utc::now")]
    pub enrolled_at: DateTime<Utc>,
}
