//! Pipeline-wide configuration.
//!
//! Penalty weights are shared by every phase — the same formula ranks
//! scenarios no matter which constraint family produced them.

use serde::{Deserialize, Serialize};

use crate::locking::DEFAULT_CLASS_SIZE_THRESHOLD;

/// Weights combining per-scenario counts into a scalar penalty.
///
/// `penalty = conflict_weight * conflicts
///          + broken_friendship_weight * broken
///          + balance_weight * size_stddev`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Weight per pedagogical conflict.
    pub conflict_weight: f64,
    /// Weight per broken friendship.
    pub broken_friendship_weight: f64,
    /// Weight on section-size standard deviation.
    pub balance_weight: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        // Conflicts dominate friendships dominate imbalance.
        Self {
            conflict_weight: 5.0,
            broken_friendship_weight: 1.0,
            balance_weight: 2.0,
        }
    }
}

impl PenaltyWeights {
    /// Computes the scalar penalty.
    pub fn penalty(&self, conflicts: u32, broken_friendships: u32, size_stddev: f64) -> f64 {
        self.conflict_weight * f64::from(conflicts)
            + self.broken_friendship_weight * f64::from(broken_friendships)
            + self.balance_weight * size_stddev
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Candidates requested from the solver per in-flight scenario.
    pub candidate_count: usize,
    /// Penalty weights, shared across phases.
    pub weights: PenaltyWeights,
    /// Tie-breaking seed for the terminal selection.
    pub seed: Option<u64>,
    /// Students per section when bootstrapping a class set.
    pub class_size_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            candidate_count: 3,
            weights: PenaltyWeights::default(),
            seed: None,
            class_size_threshold: DEFAULT_CLASS_SIZE_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-scenario candidate count.
    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the tie-breaking seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the bootstrap class-size threshold.
    pub fn with_class_size_threshold(mut self, threshold: usize) -> Self {
        self.class_size_threshold = threshold.max(1);
        self
    }
}
