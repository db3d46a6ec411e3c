//! Configuration management for the cast network analyzer

use crate::cluster::centrality::{WalkConfig, DEFAULT_NEIGHBOR_RETRIES};
use std::time::Duration;

/// Default wall-clock budget for the diameter and separation estimators
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(900);

/// Default configuration for the cast network analyzer
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Wall-clock budget for each budgeted estimator
    pub time_budget: Duration,

    /// Rank of the component the estimators sample (1 = largest)
    pub component_rank: usize,

    /// Number of random walks for the centrality estimate
    pub walk_count: usize,

    /// Maximum steps per random walk
    pub walk_length: usize,

    /// Neighbor draws per step before a walk ends
    pub neighbor_retries: usize,

    /// Actor the greatest-distance query is measured from
    pub reference_actor: Option<String>,

    /// Seed for shuffling and walks; entropy when absent
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            component_rank: 1,
            walk_count: 10_000,
            walk_length: 50,
            neighbor_retries: DEFAULT_NEIGHBOR_RETRIES,
            reference_actor: None,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with custom values
    pub fn new(
        time_budget: Duration,
        component_rank: usize,
        walk_count: usize,
        walk_length: usize,
        reference_actor: Option<String>,
    ) -> Self {
        Self {
            time_budget,
            component_rank,
            walk_count,
            walk_length,
            reference_actor,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Walk parameters for the centrality estimate
    pub fn walk_config(&self) -> WalkConfig {
        WalkConfig {
            walk_count: self.walk_count,
            walk_length: self.walk_length,
            neighbor_retries: self.neighbor_retries,
        }
    }
}
