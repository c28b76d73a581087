use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned when a request does not ask for a count
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Default weight applied to tag-affinity scores
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,

    /// Default weight applied to category-affinity scores
    #[serde(default = "default_category_weight")]
    pub category_weight: f64,

    /// Default weight applied to course popularity
    #[serde(default = "default_popularity_weight")]
    pub popularity_weight: f64,

    /// Optional path to a JSON file used to seed the in-memory store
    #[serde(default)]
    pub seed_path: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_top_n() -> usize {
    10
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

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_top_n: default_top_n(),
            tag_weight: default_tag_weight(),
            category_weight: default_category_weight(),
            popularity_weight: default_popularity_weight(),
            seed_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Weight values are validated here so that a misconfigured deployment
    /// fails at startup rather than on the first scoring request.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.weights().validate()?;
        Ok(config)
    }

    /// The scoring weights configured for this deployment
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            tag_weight: self.tag_weight,
            category_weight: self.category_weight,
            popularity_weight: self.popularity_weight,
        }
    }
}
