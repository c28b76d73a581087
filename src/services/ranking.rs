use std::cmp::Ordering;

use crate::models::ScoredCandidate;

/// Total-order comparator over scored candidates: score descending, then
/// raw tag-overlap count descending, then course id ascending.
///
/// Course ids are unique, so the ordering is total and independent of any
/// input ordering the store happened to produce.
pub fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.tag_overlap.cmp(&a.tag_overlap))
        .then_with(|| a.course_id.cmp(&b.course_id))
}

/// Sorts the scored candidates deterministically and returns the top N.
///
/// Returns fewer than N when the pool is smaller; that is a valid answer,
/// not an error.
pub fn rank(mut scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<ScoredCandidate> {
    scored.sort_unstable_by(compare);
    scored.truncate(top_n);
    scored
}
