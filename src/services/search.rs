use serde::Serialize;

use crate::models::Course;

const TITLE_WEIGHT: f64 = 3.0;
const TAG_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;

/// A catalog entry matched by a text query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub course_id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub relevance: f64,
}

/// Free-text search over course title, description, and tags.
///
/// Each whitespace-separated query term contributes field-weighted points:
/// title matches count most, tag matches next, description matches least.
/// Only published courses with a positive relevance are returned, ordered
/// by relevance descending with course id as the deterministic tie-break.
pub fn search_catalog(catalog: &[Course], query: &str, limit: usize) -> Vec<SearchHit> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = catalog
        .iter()
        .filter(|course| course.is_published)
        .filter_map(|course| {
            let relevance = relevance(course, &terms);
            (relevance > 0.0).then(|| SearchHit {
                course_id: course.course_id.clone(),
                title: course.title.clone(),
                category: course.category.clone(),
                tags: course.tags.clone(),
                relevance,
            })
        })
        .collect();

    hits.sort_unstable_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| a.course_id.cmp(&b.course_id))
    });
    hits.truncate(limit);
    hits
}

fn relevance(course: &Course, terms: &[String]) -> f64 {
    let title = course.title.to_lowercase();
    let description = course
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut relevance = 0.0;
    for term in terms {
        if title.contains(term.as_str()) {
            relevance += TITLE_WEIGHT;
        }
        if course.tags.iter().any(|tag| tag.eq_ignore_ascii_case(term)) {
            relevance += TAG_WEIGHT;
        }
        if description.contains(term.as_str()) {
            relevance += DESCRIPTION_WEIGHT;
        }
    }
    relevance
}
