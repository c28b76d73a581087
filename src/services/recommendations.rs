use crate::{
    error::{AppError, AppResult},
    models::{Course, Enrollment, ScoredCandidate, ScoringWeights},
    services::{
        candidates::filter_candidates,
        profile::build_profile,
        ranking::rank,
        scoring::score_candidate,
    },
};

/// Caller-supplied knobs for one recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendParams {
    /// Maximum number of recommendations to return; must be at least 1
    pub top_n: usize,
    pub weights: ScoringWeights,
    /// When set, an empty candidate pool is an error rather than a valid
    /// empty answer
    pub require_results: bool,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            top_n: 10,
            weights: ScoringWeights::default(),
            require_results: false,
        }
    }
}

/// The ranked recommendations plus diagnostics for the caller
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub recommendations: Vec<ScoredCandidate>,
    /// Enrollments skipped during profile construction because they
    /// referenced a missing course
    pub skipped_enrollments: usize,
}

/// Produces ranked course recommendations for a student.
///
/// Runs the four engine stages in order over the supplied snapshot:
/// profile construction, candidate filtering, scoring, ranking. Pure apart
/// from tracing; identical inputs always yield identical output.
pub fn recommend(
    student_id: &str,
    enrollments: &[Enrollment],
    courses: &[Course],
    params: &RecommendParams,
) -> AppResult<RecommendationSet> {
    if params.top_n == 0 {
        return Err(AppError::InvalidInput(
            "top_n must be a positive integer".to_string(),
        ));
    }
    params.weights.validate()?;

    let build = build_profile(student_id, enrollments, courses);
    let candidates = filter_candidates(courses, &build.profile);

    if candidates.is_empty() && params.require_results {
        return Err(AppError::EmptyCatalog(format!(
            "no eligible candidate courses for student {}",
            student_id
        )));
    }

    let scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|course| score_candidate(course, &build.profile, &params.weights))
        .collect();
    let recommendations = rank(scored, params.top_n);

    tracing::debug!(
        student_id = %student_id,
        enrolled = build.profile.enrolled.len(),
        returned = recommendations.len(),
        skipped = build.broken_references,
        "Recommendations computed"
    );

    Ok(RecommendationSet {
        recommendations,
        skipped_enrollments: build.broken_references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn course(course_id: &str, category: &str, tags: &[&str], popularity: f64) -> Course {
        Course {
            course_id: course_id.to_string(),
            title: course_id.to_string(),
            description: None,
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            popularity,
            is_published: true,
            created_at: Utc::now(),
        }
    }

    fn enrollment(id: &str, student_id: &str, course_id: &str) -> Enrollment {
        Enrollment {
            enrollment_id: id.to_string(),
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
            enrolled_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Course> {
        vec![
            course("PYT", "Programming", &["python", "programming"], 12.0),
            course("SQL", "Database", &["sql", "database"], 8.0),
            course("DSI", "Data", &["data", "python", "analysis"], 20.0),
            course("WEB", "Programming", &["javascript", "web"], 30.0),
        ]
    }

    #[test]
    fn test_enrolled_courses_never_recommended() {
        let courses = catalog();
        let enrollments = vec![
            enrollment("enr_1", "user_1", "PYT"),
            enrollment("enr_2", "user_1", "SQL"),
        ];

        let set = recommend("user_1", &enrollments, &courses, &RecommendParams::default()).unwrap();

        for rec in &set.recommendations {
            assert_ne!(rec.course_id, "PYT");
            assert_ne!(rec.course_id, "SQL");
        }
        assert_eq!(set.recommendations.len(), 2);
    }

    #[test]
    fn test_empty_history_reduces_to_popularity_ordering() {
        let courses = catalog();

        let set = recommend("new_student", &[], &courses, &RecommendParams::default()).unwrap();

        let ids: Vec<&str> = set
            .recommendations
            .iter()
            .map(|r| r.course_id.as_str())
            .collect();
        // Popularity order: WEB 30, DSI 20, PYT 12, SQL 8
        assert_eq!(ids, vec!["WEB", "DSI", "PYT", "SQL"]);
        assert_eq!(set.recommendations[0].score, 15.0);
    }

    #[test]
    fn test_popularity_dominance_regression_scenario() {
        // From the documented regression scenario: B outranks A despite
        // zero tag/category overlap because 0.5 * 50 > 15.
        let courses = vec![
            course("A", "Programming", &["python"], 10.0),
            course("B", "Data", &["java"], 50.0),
            course("PYT", "Programming", &["python"], 0.0),
            course("PY2", "Programming", &["python"], 0.0),
            course("SQL", "Database", &["sql"], 0.0),
        ];
        let enrollments = vec![
            enrollment("enr_1", "user_1", "PYT"),
            enrollment("enr_2", "user_1", "PY2"),
            enrollment("enr_3", "user_1", "SQL"),
        ];

        let set = recommend("user_1", &enrollments, &courses, &RecommendParams::default()).unwrap();

        let a = set.recommendations.iter().find(|r| r.course_id == "A").unwrap();
        let b = set.recommendations.iter().find(|r| r.course_id == "B").unwrap();
        assert_eq!(a.score, 15.0);
        assert_eq!(b.score, 25.0);
        assert_eq!(set.recommendations[0].course_id, "B");
    }

    #[test]
    fn test_idempotent_over_identical_inputs() {
        let courses = catalog();
        let enrollments = vec![enrollment("enr_1", "user_1", "PYT")];
        let params = RecommendParams::default();

        let first = recommend("user_1", &enrollments, &courses, &params).unwrap();
        let second = recommend("user_1", &enrollments, &courses, &params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_raising_tag_weight_eventually_outranks_popularity() {
        let courses = vec![
            course("A", "Programming", &["python"], 10.0),
            course("B", "Data", &["java"], 50.0),
            course("PYT", "Programming", &["python"], 0.0),
            course("PY2", "Programming", &["python"], 0.0),
        ];
        let enrollments = vec![
            enrollment("enr_1", "user_1", "PYT"),
            enrollment("enr_2", "user_1", "PY2"),
        ];

        let score_gap = |tag_weight: f64| {
            let params = RecommendParams {
                weights: ScoringWeights {
                    tag_weight,
                    ..Default::default()
                },
                ..Default::default()
            };
            let set = recommend("user_1", &enrollments, &courses, &params).unwrap();
            let a = set.recommendations.iter().find(|r| r.course_id == "A").unwrap().score;
            let b = set.recommendations.iter().find(|r| r.course_id == "B").unwrap().score;
            a - b
        };

        // The gap grows monotonically with the tag weight and crosses zero
        // once the weight clears the threshold.
        assert!(score_gap(3.0) < score_gap(5.0));
        assert!(score_gap(5.0) < score_gap(10.0));
        assert!(score_gap(10.0) > 0.0);
    }

    #[test]
    fn test_empty_pool_is_valid_unless_results_required() {
        let courses = vec![course("PYT", "Programming", &["python"], 1.0)];
        let enrollments = vec![enrollment("enr_1", "user_1", "PYT")];

        let set = recommend("user_1", &enrollments, &courses, &RecommendParams::default()).unwrap();
        assert!(set.recommendations.is_empty());

        let params = RecommendParams {
            require_results: true,
            ..Default::default()
        };
        let err = recommend("user_1", &enrollments, &courses, &params).unwrap_err();
        assert!(matches!(err, AppError::EmptyCatalog(_)));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let params = RecommendParams {
            top_n: 0,
            ..Default::default()
        };
        let err = recommend("user_1", &[], &catalog(), &params).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_weights_rejected_before_scoring() {
        let params = RecommendParams {
            weights: ScoringWeights {
                category_weight: -2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = recommend("user_1", &[], &catalog(), &params).unwrap_err();
        assert!(matches!(err, AppError::InvalidWeights(_)));
    }

    #[test]
    fn test_broken_references_surfaced_in_diagnostics() {
        let courses = catalog();
        let enrollments = vec![
            enrollment("enr_1", "user_1", "PYT"),
            enrollment("enr_2", "user_1", "DELETED"),
        ];

        let set = recommend("user_1", &enrollments, &courses, &RecommendParams::default()).unwrap();

        assert_eq!(set.skipped_enrollments, 1);
        assert!(!set.recommendations.is_empty());
    }

    #[test]
    fn test_unpublished_courses_never_surface() {
        let mut courses = catalog();
        courses.push(Course {
            is_published: false,
            ..course("DRAFT", "Programming", &["python"], 1000.0)
        });

        let set = recommend("new_student", &[], &courses, &RecommendParams::default()).unwrap();

        assert!(set.recommendations.iter().all(|r| r.course_id != "DRAFT"));
    }
}
