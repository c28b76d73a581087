use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Weights for the linear combination of scoring signals.
///
/// Passed as an explicit structure with named fields rather than loose
/// key/value pairs so a misspelled weight cannot silently fall back to a
/// default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,
    #[serde(default = "default_category_weight")]
    pub category_weight: f64,
    #[serde(default = "default_popularity_weight")]
    pub popularity_weight: f64,
}

fn default_tag_weight() -> f64 {
    3.0
}

fn default_category_weight() -> f64 {
    2.0
}

fn default_popularity_weight() -> f64 {
    0.5
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag_weight: default_tag_weight(),
            category_weight: default_category_weight(),
            popularity_weight: default_popularity_weight(),
        }
    }
}

impl ScoringWeights {
    /// Rejects weights that would break scoring before any candidate is
    /// touched. Negative weights invert signals; non-finite values poison
    /// the total ordering.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("tag_weight", self.tag_weight),
            ("category_weight", self.category_weight),
            ("popularity_weight", self.popularity_weight),
        ] {
            if !value.is_finite() {
                return Err(AppError::InvalidWeights(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(AppError::InvalidWeights(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
