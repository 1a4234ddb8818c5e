use serde::Deserialize;

pub const DEFAULT_NUM_RECOMMENDATIONS: usize = 5;

/// Controls how [crate::Recommender::recommend_interests] aggregates and truncates.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of recommendations returned.
    pub num_recommendations: usize,

    /// When set, only the `n` most similar friends contribute to scores. `None` considers every
    /// friend.
    pub num_friends_considered: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_recommendations: DEFAULT_NUM_RECOMMENDATIONS,
            num_friends_considered: None,
        }
    }
}
