use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Source of the random term added to the confidence value.
pub trait JitterSource: Send {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Suspension point between accepting a submission and showing its result.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// How the diabetes flag relates to the risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// Flag is raised above a score of 50 while the high tier starts at 60.
    #[default]
    Legacy,
    /// Flag is raised exactly when the tier is high.
    Aligned,
}

pub trait ConfigProvider: Send + Sync {
    fn analysis_delay(&self) -> Duration;
    fn scoring_policy(&self) -> ScoringPolicy;
    fn seed(&self) -> Option<u64>;
}
