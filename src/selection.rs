//! Winner selection over locked scenarios.
//!
//! Ranking is ascending by penalty. Ties break deterministically: with a
//! seed, each tied record gets a key drawn from a generator seeded by
//! (seed, phase index, scenario index), so the winner does not depend on
//! the order in which candidates were computed; without a seed, the
//! record with the lowest scenario index (then phase index) wins.

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::error::{Result, SectioningError};
use crate::models::ScenarioRecord;

/// Ranks scenario records and returns the single best one.
///
/// # Example
///
/// ```
/// use sectioner::selection::Selector;
///
/// let selector = Selector::new().with_seed(42);
/// # let records: Vec<sectioner::models::ScenarioRecord> = Vec::new();
/// assert!(selector.select_best(&records).is_err()); // empty set
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    seed: Option<u64>,
    epsilon: f64,
}

impl Selector {
    /// Creates a selector with index-based tie-breaking.
    pub fn new() -> Self {
        Self {
            seed: None,
            epsilon: 1e-9,
        }
    }

    /// Sets the tie-breaking seed.
    ///
    /// The same seed yields the same winner for the same record set,
    /// independent of slice order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns indices into `records`, best first.
    pub fn rank_indices(&self, records: &[ScenarioRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&records[a], &records[b]));
        indices
    }

    /// Returns the winning record.
    ///
    /// Fails with [`SectioningError::EmptyCandidateSet`] when `records`
    /// is empty.
    pub fn select_best<'a>(&self, records: &'a [ScenarioRecord]) -> Result<&'a ScenarioRecord> {
        let winner = records
            .iter()
            .min_by(|a, b| self.compare(a, b))
            .ok_or(SectioningError::EmptyCandidateSet)?;

        info!(
            phase = winner.phase_index,
            scenario = winner.scenario_index,
            penalty = winner.metrics.penalty,
            "selected winning scenario"
        );
        Ok(winner)
    }

    fn compare(&self, a: &ScenarioRecord, b: &ScenarioRecord) -> Ordering {
        let pa = a.metrics.penalty;
        let pb = b.metrics.penalty;
        if (pa - pb).abs() > self.epsilon {
            return pa.partial_cmp(&pb).unwrap_or(Ordering::Equal);
        }

        match self.seed {
            Some(seed) => tie_key(seed, a)
                .cmp(&tie_key(seed, b))
                .then_with(|| coords(a).cmp(&coords(b))),
            None => a
                .scenario_index
                .cmp(&b.scenario_index)
                .then_with(|| a.phase_index.cmp(&b.phase_index)),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable per-record tie key.
///
/// Derived from the record's coordinates alone, never from its position
/// in the slice.
fn tie_key(seed: u64, record: &ScenarioRecord) -> u64 {
    let (phase, scenario) = coords(record);
    let mixed = seed ^ (((phase as u64) << 32) | scenario as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    SmallRng::seed_from_u64(mixed).next_u64()
}

fn coords(record: &ScenarioRecord) -> (usize, usize) {
    (record.phase_index, record.scenario_index)
}
