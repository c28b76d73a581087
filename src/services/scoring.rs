use std::collections::HashSet;

use crate::models::{Course, ScoredCandidate, ScoringWeights, Signal, SignalContribution, StudentProfile};

/// Scores one candidate course against a student profile.
///
/// The score is a weighted linear combination of three signals:
/// tag affinity (each candidate tag present in the profile contributes its
/// profile frequency), category affinity (how often the candidate's
/// category appears in the history), and global popularity. A pure function
/// of (profile, course, weights): identical inputs always yield the
/// identical score. For an empty profile the first two signals are zero and
/// the score reduces to `popularity_weight * popularity`.
pub fn score_candidate(
    course: &Course,
    profile: &StudentProfile,
    weights: &ScoringWeights,
) -> ScoredCandidate {
    let candidate_tags: HashSet<String> = course.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut tag_affinity: u32 = 0;
    let mut tag_overlap: u32 = 0;
    for tag in &candidate_tags {
        let frequency = profile.tag_affinity(tag);
        if frequency > 0 {
            tag_overlap += 1;
            tag_affinity += frequency;
        }
    }

    let category_affinity = profile.category_affinity(&course.category);

    let breakdown = vec![
        SignalContribution::new(Signal::TagAffinity, weights.tag_weight, f64::from(tag_affinity)),
        SignalContribution::new(
            Signal::CategoryAffinity,
            weights.category_weight,
            f64::from(category_affinity),
        ),
        SignalContribution::new(Signal::Popularity, weights.popularity_weight, course.popularity),
    ];
    let score = breakdown.iter().map(|c| c.weighted).sum();

    ScoredCandidate {
        course_id: course.course_id.clone(),
        score,
        tag_overlap,
        breakdown,
    }
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

    fn profile() -> StudentProfile {
        let mut profile = StudentProfile::new("user_1");
        profile.tag_counts.insert("python".to_string(), 2);
        profile.tag_counts.insert("sql".to_string(), 1);
        profile.category_counts.insert("Programming".to_string(), 2);
        profile
    }

    #[test]
    fn test_documented_scoring_scenario() {
        // Profile {python: 2, sql: 1; Programming: 2} with default weights.
        // A: tags [python], Programming, popularity 10 -> 3*2 + 2*2 + 0.5*10 = 15
        // B: tags [java], Data, popularity 50 -> 0 + 0 + 0.5*50 = 25
        let profile = profile();
        let weights = ScoringWeights::default();

        let a = score_candidate(&course("A", "Programming", &["python"], 10.0), &profile, &weights);
        let b = score_candidate(&course("B", "Data", &["java"], 50.0), &profile, &weights);

        assert_eq!(a.score, 15.0);
        assert_eq!(b.score, 25.0);
        assert_eq!(a.tag_overlap, 1);
        assert_eq!(b.tag_overlap, 0);
    }

    #[test]
    fn test_tag_occurrences_weighted_by_profile_frequency() {
        let profile = profile();
        let weights = ScoringWeights::default();

        // python (2) + sql (1) -> affinity 3, overlap 2
        let scored = score_candidate(
            &course("C", "Data", &["python", "sql", "cloud"], 0.0),
            &profile,
            &weights,
        );

        assert_eq!(scored.tag_overlap, 2);
        assert_eq!(scored.score, 3.0 * 3.0);
    }

    #[test]
    fn test_candidate_tags_matched_case_insensitively() {
        let profile = profile();
        let weights = ScoringWeights::default();

        let scored = score_candidate(&course("C", "Data", &["Python"], 0.0), &profile, &weights);

        assert_eq!(scored.tag_overlap, 1);
        assert_eq!(scored.score, 6.0);
    }

    #[test]
    fn test_duplicate_candidate_tags_count_once() {
        let profile = profile();
        let weights = ScoringWeights::default();

        let scored = score_candidate(
            &course("C", "Data", &["python", "Python"], 0.0),
            &profile,
            &weights,
        );

        assert_eq!(scored.tag_overlap, 1);
        assert_eq!(scored.score, 6.0);
    }

    #[test]
    fn test_empty_profile_reduces_to_popularity() {
        let empty = StudentProfile::new("new_student");
        let weights = ScoringWeights::default();

        let scored = score_candidate(
            &course("C", "Programming", &["python"], 40.0),
            &empty,
            &weights,
        );

        assert_eq!(scored.score, 20.0);
        assert_eq!(scored.tag_overlap, 0);
    }

    #[test]
    fn test_breakdown_is_ordered_and_consistent() {
        let profile = profile();
        let weights = ScoringWeights::default();

        let scored = score_candidate(
            &course("A", "Programming", &["python"], 10.0),
            &profile,
            &weights,
        );

        let signals: Vec<Signal> = scored.breakdown.iter().map(|c| c.signal).collect();
        assert_eq!(
            signals,
            vec![Signal::TagAffinity, Signal::CategoryAffinity, Signal::Popularity]
        );
        let total: f64 = scored.breakdown.iter().map(|c| c.weighted).sum();
        assert_eq!(total, scored.score);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let profile = profile();
        let weights = ScoringWeights::default();
        let candidate = course("A", "Programming", &["python", "sql"], 12.5);

        let first = score_candidate(&candidate, &profile, &weights);
        let second = score_candidate(&candidate, &profile, &weights);

        assert_eq!(first, second);
    }
}
