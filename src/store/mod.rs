//! Document-store abstraction.
//!
//! The engine treats the store as a read-only collaborator that hands back
//! a finite, already-fetched snapshot of course and enrollment records; the
//! mutation methods exist so the in-memory implementation can be seeded and
//! exercised over HTTP. Swapping in a real document database means
//! implementing this trait.

use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{Course, CourseDocument, Enrollment},
};

pub mod memory;

pub use memory::MemoryStore;

/// A consistent view of the catalog and enrollment records, with course
/// popularity already materialized. Everything the engine needs for one
/// scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

/// Request shape for recording a new enrollment
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewEnrollment {
    pub student_id: String,
    pub course_id: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    /// A consistent snapshot of courses and enrollments for scoring
    async fn snapshot(&self) -> AppResult<Snapshot>;

    /// All courses in catalog insertion order
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// A single course by id
    async fn get_course(&self, course_id: &str) -> AppResult<Option<Course>>;

    /// Adds a course to the catalog; the id must be unused
    async fn insert_course(&self, document: CourseDocument) -> AppResult<Course>;

    /// Enrollments, optionally restricted to one student
    async fn list_enrollments<'a>(&self, student_id: Option<&'a str>) -> AppResult<Vec<Enrollment>>;

    /// Records an enrollment; duplicate (student, course) pairs are
    /// rejected
    async fn insert_enrollment(&self, enrollment: NewEnrollment) -> AppResult<Enrollment>;
}
