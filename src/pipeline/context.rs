//! Pipeline context: run state threaded between phases.

use crate::models::{Roster, ScenarioRecord};

/// The evolving state of one pipeline run.
///
/// Holds the original roster and the in-flight scenario records of the
/// most recently completed phase. Constructed per run and owned by the
/// orchestrator — passed by reference through the pipeline, never
/// global, discarded (or exported) after the terminal selection.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    roster: Roster,
    records: Vec<ScenarioRecord>,
    completed_phases: usize,
}

impl PipelineContext {
    /// Creates a context with no completed phases.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            records: Vec::new(),
            completed_phases: 0,
        }
    }

    /// The roster shared by all phases.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// In-flight records of the latest completed phase.
    ///
    /// Empty before the first phase has run.
    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    /// Number of completed phases.
    pub fn completed_phases(&self) -> usize {
        self.completed_phases
    }

    /// Replaces the in-flight set with a completed phase's records.
    ///
    /// The previous phase's records are superseded, never mutated.
    pub fn advance(&mut self, records: Vec<ScenarioRecord>) {
        self.records = records;
        self.completed_phases += 1;
    }
}
