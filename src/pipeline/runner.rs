//! Phase runner and pipeline orchestrator.
//!
//! The runner turns one phase's raw candidates into locked, validated,
//! scored scenario records. Candidates are independent of each other —
//! each gets its own assignment copy — so they are processed in
//! parallel and merged into an ordered record list at the end.
//!
//! Every candidate a phase produces is retained and threaded forward;
//! "best" is only well-defined after scoring, so nothing is discarded
//! before the terminal selection. Record counts therefore multiply
//! across phases — `candidate_count` bounds the fan-out per in-flight
//! scenario, not per phase.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, SectioningError};
use crate::locking::CompletionLocker;
use crate::models::{Assignment, ClassSizeStats, Roster, ScenarioMetrics, ScenarioRecord};
use crate::selection::Selector;
use crate::validation::validate_assignment;

use super::{CandidateAssignment, PhaseSolver, PipelineConfig, PipelineContext};

/// Shared flag for aborting a run while a phase is in flight.
///
/// Cancellation is all-or-nothing per phase: in-flight candidates stop
/// at their next check, the phase fails with
/// [`SectioningError::RunCancelled`], and no record reaches the next
/// phase.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates an uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs one phase: generate, lock, validate, score.
#[derive(Debug, Clone)]
pub struct PhaseRunner {
    config: PipelineConfig,
}

impl PhaseRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Produces the phase's scenario records.
    ///
    /// Asks the solver for up to `candidate_count` candidates once per
    /// in-flight record of the previous phase (once with an
    /// all-unassigned assignment at phase 0), then completes, validates,
    /// and scores each candidate.
    ///
    /// Fails with [`SectioningError::NoCandidates`] when the solver
    /// yields nothing, and with [`SectioningError::RunCancelled`] when
    /// the token fires mid-phase. Either way the phase emits no records.
    pub fn run(
        &self,
        phase_index: usize,
        context: &PipelineContext,
        solver: &dyn PhaseSolver,
        candidate_count: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScenarioRecord>> {
        let roster = context.roster();

        let mut candidates: Vec<CandidateAssignment> = Vec::new();
        if context.records().is_empty() {
            let unassigned = Assignment::empty(roster);
            candidates.extend(solver.generate(roster, &unassigned, candidate_count));
        } else {
            for record in context.records() {
                candidates.extend(solver.generate(roster, &record.assignment, candidate_count));
            }
        }

        if candidates.is_empty() {
            return Err(SectioningError::NoCandidates { phase: phase_index });
        }

        info!(
            phase = phase_index,
            solver = solver.name(),
            candidates = candidates.len(),
            "running phase"
        );

        let locker =
            CompletionLocker::new().with_class_size_threshold(self.config.class_size_threshold);

        let records: Vec<ScenarioRecord> = candidates
            .into_par_iter()
            .enumerate()
            .map(|(scenario_index, candidate)| {
                self.complete_candidate(phase_index, scenario_index, candidate, roster, &locker, cancel)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            phase = phase_index,
            records = records.len(),
            "phase complete"
        );
        Ok(records)
    }

    /// Locks, validates, and scores a single candidate.
    fn complete_candidate(
        &self,
        phase_index: usize,
        scenario_index: usize,
        candidate: CandidateAssignment,
        roster: &Roster,
        locker: &CompletionLocker,
        cancel: &CancellationToken,
    ) -> Result<ScenarioRecord> {
        if cancel.is_cancelled() {
            return Err(SectioningError::RunCancelled { phase: phase_index });
        }

        let (assignment, lock_stats) = locker.lock(&candidate.assignment, roster)?;
        debug!(
            phase = phase_index,
            scenario = scenario_index,
            newly_placed = lock_stats.newly_placed,
            sections = lock_stats.class_distribution.len(),
            "locked candidate"
        );

        let report = validate_assignment(&assignment);
        if !report.is_complete {
            return Err(SectioningError::IncompleteAssignment {
                phase: phase_index,
                unassigned: report.unassigned_count,
            });
        }

        let class_size_stats = report.class_size_stats.unwrap_or(ClassSizeStats {
            min: 0,
            max: 0,
            mean: 0.0,
            stddev: 0.0,
        });

        let penalty = self.config.weights.penalty(
            candidate.conflict_count,
            candidate.broken_friendship_count,
            class_size_stats.stddev,
        );

        Ok(ScenarioRecord {
            phase_index,
            scenario_index,
            assignment,
            metrics: ScenarioMetrics {
                conflict_count: candidate.conflict_count,
                broken_friendship_count: candidate.broken_friendship_count,
                penalty,
            },
            class_size_stats,
        })
    }
}

/// Final result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// The winning scenario, promoted from the terminal phase.
    pub winner: ScenarioRecord,
    /// Every phase's full record set, in phase order.
    pub phases: Vec<Vec<ScenarioRecord>>,
}

/// Multi-phase orchestrator.
///
/// Owns the phase solvers and the run configuration; constructs a fresh
/// [`PipelineContext`] per run, threads the full candidate set between
/// phases, and applies the selector at the terminal phase only.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    solvers: Vec<Arc<dyn PhaseSolver>>,
}

impl Pipeline {
    /// Creates a pipeline with no phases.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            solvers: Vec::new(),
        }
    }

    /// Appends a phase.
    pub fn with_solver<S: PhaseSolver + 'static>(mut self, solver: S) -> Self {
        self.solvers.push(Arc::new(solver));
        self
    }

    /// Number of configured phases.
    pub fn phase_count(&self) -> usize {
        self.solvers.len()
    }

    /// Runs every phase and selects the winner.
    pub fn run(&self, roster: Roster) -> Result<PipelineOutcome> {
        self.run_with_cancellation(roster, &CancellationToken::new())
    }

    /// Runs with an external cancellation token.
    pub fn run_with_cancellation(
        &self,
        roster: Roster,
        cancel: &CancellationToken,
    ) -> Result<PipelineOutcome> {
        let runner = PhaseRunner::new(self.config.clone());
        let mut context = PipelineContext::new(roster);
        let mut phases = Vec::with_capacity(self.solvers.len());

        for (phase_index, solver) in self.solvers.iter().enumerate() {
            let records = runner.run(
                phase_index,
                &context,
                solver.as_ref(),
                self.config.candidate_count,
                cancel,
            )?;
            phases.push(records.clone());
            context.advance(records);
        }

        let mut selector = Selector::new();
        if let Some(seed) = self.config.seed {
            selector = selector.with_seed(seed);
        }
        let winner = selector.select_best(context.records())?.clone();

        Ok(PipelineOutcome { winner, phases })
    }
}
