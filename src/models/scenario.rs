//! Scenario record: one locked candidate assignment with its bookkeeping.
//!
//! A scenario is the unit of comparison between phases. Records are
//! immutable once created — a later phase produces new records, it never
//! mutates an earlier one. Decisions locked in phase *k* are revisited in
//! phase *k+1* only by placing students that were still unassigned.

use serde::{Deserialize, Serialize};

use super::Assignment;

/// Quality counts for one scenario, combined into a scalar penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// Number of pedagogical conflicts placed in the same section.
    pub conflict_count: u32,
    /// Number of mutual friendships split across sections.
    pub broken_friendship_count: u32,
    /// Weighted scalar used for ranking. Lower is better.
    pub penalty: f64,
}

/// Distribution statistics over section sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassSizeStats {
    /// Smallest section size.
    pub min: usize,
    /// Largest section size.
    pub max: usize,
    /// Mean section size.
    pub mean: f64,
    /// Sample standard deviation of section sizes (0 for a single section).
    pub stddev: f64,
}

impl ClassSizeStats {
    /// Computes statistics over the given section sizes.
    ///
    /// Returns `None` for an empty slice — statistics over no sections
    /// are meaningless rather than zero.
    pub fn from_sizes(sizes: &[usize]) -> Option<Self> {
        let min = *sizes.iter().min()?;
        let max = *sizes.iter().max()?;
        let n = sizes.len() as f64;
        let mean = sizes.iter().sum::<usize>() as f64 / n;

        let stddev = if sizes.len() < 2 {
            0.0
        } else {
            let variance = sizes
                .iter()
                .map(|&s| (s as f64 - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0);
            variance.sqrt()
        };

        Some(Self {
            min,
            max,
            mean,
            stddev,
        })
    }
}

/// One complete, self-consistent candidate class assignment.
///
/// Created by the phase runner immediately after completion locking and
/// validation; addressable by `(phase_index, scenario_index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Index of the phase that produced this record.
    pub phase_index: usize,
    /// Index of this scenario within its phase.
    pub scenario_index: usize,
    /// The locked, total assignment.
    pub assignment: Assignment,
    /// Quality counts and penalty.
    pub metrics: ScenarioMetrics,
    /// Section-size distribution of the locked assignment.
    pub class_size_stats: ClassSizeStats,
}

impl ScenarioRecord {
    /// Whether every student in the assignment has a section.
    pub fn is_complete(&self) -> bool {
        self.assignment.is_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_single_section() {
        let stats = ClassSizeStats::from_sizes(&[10]).unwrap();
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 10);
        assert!((stats.mean - 10.0).abs() < 1e-10);
        assert!((stats.stddev - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_balanced_sections() {
        let stats = ClassSizeStats::from_sizes(&[25, 25]).unwrap();
        assert_eq!(stats.min, 25);
        assert_eq!(stats.max, 25);
        assert!((stats.mean - 25.0).abs() < 1e-10);
        assert!((stats.stddev - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_spread_sections() {
        // Sizes 4 and 6: mean 5, sample variance (1+1)/1 = 2
        let stats = ClassSizeStats::from_sizes(&[4, 6]).unwrap();
        assert_eq!(stats.min, 4);
        assert_eq!(stats.max, 6);
        assert!((stats.mean - 5.0).abs() < 1e-10);
        assert!((stats.stddev - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        assert!(ClassSizeStats::from_sizes(&[]).is_none());
    }

    #[test]
    fn test_record_completeness() {
        let mut assignment = Assignment::new();
        assignment.place("a", "A1");
        assignment.mark_unassigned("b");

        let record = ScenarioRecord {
            phase_index: 0,
            scenario_index: 0,
            assignment,
            metrics: ScenarioMetrics {
                conflict_count: 0,
                broken_friendship_count: 0,
                penalty: 0.0,
            },
            class_size_stats: ClassSizeStats::from_sizes(&[1]).unwrap(),
        };

        assert!(!record.is_complete());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut assignment = Assignment::new();
        assignment.place("a", "A1");

        let record = ScenarioRecord {
            phase_index: 1,
            scenario_index: 2,
            assignment,
            metrics: ScenarioMetrics {
                conflict_count: 3,
                broken_friendship_count: 1,
                penalty: 16.0,
            },
            class_size_stats: ClassSizeStats::from_sizes(&[1]).unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ScenarioRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.phase_index, 1);
        assert_eq!(back.scenario_index, 2);
    }
}
