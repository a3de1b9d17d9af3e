//! Test fixtures and data factories

use sentiment_gateway::Config;
use sentiment_gateway::core::{EmotionLabel, EmotionScore};
use std::collections::{BTreeSet, HashMap};

/// Key accepted by [`ConfigFactory::create`] with the default quota
pub const TEST_KEY: &str = "test-key";
/// Key accepted by [`ConfigFactory::create`] with a quota of two
pub const LIMITED_KEY: &str = "limited-key";

/// Factory for service configuration
pub struct ConfigFactory;

impl ConfigFactory {
    /// Configuration with two known keys and a small default quota
    pub fn create() -> Config {
        let mut config = Config::default();
        config.gateway.security.api_keys =
            BTreeSet::from([TEST_KEY.to_string(), LIMITED_KEY.to_string()]);
        config.gateway.security.api_key_limits = HashMap::from([(LIMITED_KEY.to_string(), 2)]);
        config.gateway.rate_limit.requests_per_window = 5;
        config
    }

    /// Configuration with caching turned off
    pub fn without_cache() -> Config {
        let mut config = Self::create();
        config.gateway.cache.enabled = false;
        config
    }
}

/// Factory for classifier output
pub struct ScoreFactory;

impl ScoreFactory {
    /// Unsorted scores whose top label is joy
    pub fn joyful() -> Vec<EmotionScore> {
        vec![
            EmotionScore::new(EmotionLabel::Neutral, 0.05),
            EmotionScore::new(EmotionLabel::Joy, 0.85),
            EmotionScore::new(EmotionLabel::Excitement, 0.10),
        ]
    }

    /// Single-label output
    pub fn single(label: EmotionLabel, score: f64) -> Vec<EmotionScore> {
        vec![EmotionScore::new(label, score)]
    }
}
