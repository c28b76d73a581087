use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Per-student aggregate of enrollment history.
///
/// Built fresh for every recommendation request and discarded afterwards;
/// it has no lifecycle beyond a single scoring invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub student_id: String,
    /// Course ids the student is already enrolled in
    pub enrolled: HashSet<String>,
    /// Lowercased tag -> number of enrolled courses carrying that tag
    pub tag_counts: HashMap<String, u32>,
    /// Category -> number of enrolled courses in that category
    pub category_counts: HashMap<String, u32>,
}

impl StudentProfile {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            enrolled: HashSet::new(),
            tag_counts: HashMap::new(),
            category_counts: HashMap::new(),
        }
    }

    /// True when the student has no usable enrollment history.
    ///
    /// Scoring an empty profile reduces to popularity alone.
    pub fn is_empty(&self) -> bool {
        self.enrolled.is_empty()
    }

    /// How often the given (lowercased) tag appears in the history
    pub fn tag_affinity(&self, tag: &str) -> u32 {
        self.tag_counts.get(tag).copied().unwrap_or(0)
    }

    /// How often the given category appears in the history
    pub fn category_affinity(&self, category: &str) -> u32 {
        self.category_counts.get(category).copied().unwrap_or(0)
    }
}

/// The scoring signals combined into a candidate's relevance score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    TagAffinity,
    CategoryAffinity,
    Popularity,
}

/// One signal's contribution to a candidate's score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalContribution {
    pub signal: Signal,
    pub weight: f64,
    pub raw: f64,
    pub weighted: f64,
}

impl SignalContribution {
    pub fn new(signal: Signal, weight: f64, raw: f64) -> Self {
        Self {
            signal,
            weight,
            raw,
            weighted: weight * raw,
        }
    }
}

/// A candidate course with its computed relevance score and the ordered
/// per-signal breakdown it was derived from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    pub course_id: String,
    pub score: f64,
    /// Distinct candidate tags present in the profile; first tie-break key
    pub tag_overlap: u32,
    pub breakdown: Vec<SignalContribution>,
}
