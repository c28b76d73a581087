use crate::models::{Course, StudentProfile};

/// Produces the candidate pool for scoring: the catalog in insertion order,
/// minus courses the student is already enrolled in and minus unpublished
/// courses.
///
/// An empty result is a valid answer (e.g., the student enrolled in
/// everything); whether that is an error is the orchestrator's call.
pub fn filter_candidates<'a>(catalog: &'a [Course], profile: &StudentProfile) -> Vec<&'a Course> {
    catalog
        .iter()
        .filter(|course| course.is_published)
        .filter(|course| !profile.enrolled.contains(&course.course_id))
        .collect()
}
