use std::collections::HashMap;

use crate::models::{Course, Enrollment, StudentProfile};

/// A freshly built profile together with the number of enrollments that
/// had to be skipped because they referenced a missing course
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBuild {
    pub profile: StudentProfile,
    pub broken_references: usize,
}

/// Derives a student's profile from enrollment and course records in a
/// single accumulation pass.
///
/// Each enrolled course contributes one increment per tag occurrence
/// (lowercased) and one increment for its category. An enrollment whose
/// course cannot be found is a recoverable data-quality condition: it is
/// skipped, counted, and logged, never fatal. A student with zero
/// enrollments yields an empty profile, which is a valid state.
pub fn build_profile(
    student_id: &str,
    enrollments: &[Enrollment],
    courses: &[Course],
) -> ProfileBuild {
    let by_id: HashMap<&str, &Course> = courses
        .iter()
        .map(|course| (course.course_id.as_str(), course))
        .collect();

    let mut profile = StudentProfile::new(student_id);
    let mut broken_references = 0;

    for enrollment in enrollments
        .iter()
        .filter(|e| e.student_id == student_id)
    {
        let Some(course) = by_id.get(enrollment.course_id.as_str()) else {
            broken_references += 1;
            continue;
        };

        if !profile.enrolled.insert(course.course_id.clone()) {
            continue;
        }
        for tag in &course.tags {
            *profile.tag_counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
        *profile
            .category_counts
            .entry(course.category.clone())
            .or_insert(0) += 1;
    }

    if broken_references > 0 {
        tracing::warn!(
            student_id = %student_id,
            skipped = broken_references,
            "Skipped enrollments referencing missing courses"
        );
    }

    ProfileBuild {
        profile,
        broken_references,
    }
}
