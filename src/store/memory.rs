use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Course, CourseDocument, Enrollment},
};

use super::{CourseStore, NewEnrollment, Snapshot};

/// In-memory document store.
///
/// Courses and enrollments live in insertion order behind an RwLock, and
/// nothing is persisted. Popularity is materialized at snapshot time — an explicit
/// value on the stored document wins, otherwise the course's current
/// enrollment count is used.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    courses: Vec<CourseDocument>,
    course_ids: HashSet<String>,
    enrollments: Vec<Enrollment>,
    enrollment_keys: HashSet<(String, String)>,
    next_enrollment: u64,
}

/// Seed file shape: `{ "courses": [...], "enrollments": [...] }`
#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub courses: Vec<CourseDocument>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Builds a store pre-populated from seed data, applying the same
    /// uniqueness rules as the insert methods.
    pub fn from_seed(seed: SeedData) -> anyhow::Result<Self> {
        let mut inner = Inner::default();

        for document in seed.courses {
            validate_course(&document)?;
            if !inner.course_ids.insert(document.course_id.clone()) {
                anyhow::bail!("duplicate course id in seed data: {}", document.course_id);
            }
            inner.courses.push(document);
        }

        for enrollment in seed.enrollments {
            let key = (enrollment.student_id.clone(), enrollment.course_id.clone());
            if !inner.enrollment_keys.insert(key) {
                anyhow::bail!(
                    "duplicate enrollment in seed data: {} / {}",
                    enrollment.student_id,
                    enrollment.course_id
                );
            }
            inner.enrollments.push(enrollment);
        }
        inner.next_enrollment = inner.enrollments.len() as u64;

        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Loads seed data from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read seed file {}: {}", path.display(), e))?;
        let seed: SeedData = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("failed to parse seed file {}: {}", path.display(), e))?;
        let store = Self::from_seed(seed)?;
        Ok(store)
    }
}

fn validate_course(document: &CourseDocument) -> AppResult<()> {
    if document.course_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "course_id must not be blank".to_string(),
        ));
    }
    if document.category.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "category must not be blank".to_string(),
        ));
    }
    if let Some(popularity) = document.popularity {
        if !popularity.is_finite() || popularity < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "popularity must be a non-negative number, got {}",
                popularity
            )));
        }
    }
    Ok(())
}

impl Inner {
    fn enrollment_counts(&self) -> HashMap<&str, u64> {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for enrollment in &self.enrollments {
            *counts.entry(enrollment.course_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn materialize_courses(&self) -> Vec<Course> {
        let counts = self.enrollment_counts();
        self.courses
            .iter()
            .map(|document| {
                let enrolled = counts
                    .get(document.course_id.as_str())
                    .copied()
                    .unwrap_or(0);
                document.materialize(enrolled)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl CourseStore for MemoryStore {
    async fn snapshot(&self) -> AppResult<Snapshot> {
        let inner = self.inner.read().await;
        Ok(Snapshot {
            courses: inner.materialize_courses(),
            enrollments: inner.enrollments.clone(),
        })
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        let inner = self.inner.read().await;
        Ok(inner.materialize_courses())
    }

    async fn get_course(&self, course_id: &str) -> AppResult<Option<Course>> {
        let inner = self.inner.read().await;
        let counts = inner.enrollment_counts();
        Ok(inner
            .courses
            .iter()
            .find(|document| document.course_id == course_id)
            .map(|document| {
                document.materialize(counts.get(course_id).copied().unwrap_or(0))
            }))
    }

    async fn insert_course(&self, document: CourseDocument) -> AppResult<Course> {
        validate_course(&document)?;

        let mut inner = self.inner.write().await;
        if !inner.course_ids.insert(document.course_id.clone()) {
            return Err(AppError::Conflict(format!(
                "course {} already exists",
                document.course_id
            )));
        }

        let enrolled = inner
            .enrollment_counts()
            .get(document.course_id.as_str())
            .copied()
            .unwrap_or(0);
        let course = document.materialize(enrolled);
        inner.courses.push(document);
        tracing::info!(course_id = %course.course_id, "Course added to catalog");
        Ok(course)
    }

    async fn list_enrollments<'a>(&self, student_id: Option<&'a str>) -> AppResult<Vec<Enrollment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .enrollments
            .iter()
            .filter(|enrollment| {
                student_id.map_or(true, |id| enrollment.student_id == id)
            })
            .cloned()
            .collect())
    }

    async fn insert_enrollment(&self, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        if enrollment.student_id.trim().is_empty() || enrollment.course_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "student_id and course_id must not be blank".to_string(),
            ));
        }

        let mut inner = self.inner.write().await;
        let key = (enrollment.student_id.clone(), enrollment.course_id.clone());
        if !inner.enrollment_keys.insert(key) {
            return Err(AppError::Conflict(format!(
                "student {} is already enrolled in {}",
                enrollment.student_id, enrollment.course_id
            )));
        }

        inner.next_enrollment += 1;
        let record = Enrollment {
            enrollment_id: format!("enr_{}", inner.next_enrollment),
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            enrolled_at: chrono::Utc::now(),
        };
        inner.enrollments.push(record.clone());
        tracing::info!(
            enrollment_id = %record.enrollment_id,
            student_id = %record.student_id,
            course_id = %record.course_id,
            "Enrollment recorded"
        );
        Ok(record)
    }
}
