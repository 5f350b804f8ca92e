//! Phase orchestration for the sectioning pipeline.
//!
//! A run is a sequence of phases. Each phase asks a [`PhaseSolver`] for
//! raw candidate placements, completes and validates every candidate,
//! scores it, and threads the full set of resulting records to the next
//! phase. The terminal phase's records go to the selector.
//!
//! # Usage
//!
//! ```
//! use sectioner::pipeline::{Pipeline, PipelineConfig, solvers};
//! use sectioner::models::{Gender, Roster, Student};
//!
//! let roster = Roster::from_students(vec![
//!     Student::new("maria")
//!         .with_gender(Gender::Girl)
//!         .with_language_proficient(true)
//!         .with_teacher_child(false),
//! ])
//! .unwrap();
//!
//! let pipeline = Pipeline::new(PipelineConfig::default())
//!     .with_solver(solvers::Passthrough);
//! let outcome = pipeline.run(roster).unwrap();
//! assert!(outcome.winner.is_complete());
//! ```

mod config;
mod context;
mod runner;
pub mod solvers;

pub use config::{PenaltyWeights, PipelineConfig};
pub use context::PipelineContext;
pub use runner::{CancellationToken, PhaseRunner, Pipeline, PipelineOutcome};

use std::fmt::Debug;

use crate::models::{Assignment, Roster};

/// A partial assignment plus the solver's own quality counts.
///
/// Provisional: students may still be unassigned, and nothing is scored
/// yet. The phase runner completes, validates, and scores it into a
/// [`ScenarioRecord`](crate::models::ScenarioRecord).
#[derive(Debug, Clone)]
pub struct CandidateAssignment {
    /// The (possibly partial) placements.
    pub assignment: Assignment,
    /// Conflicting pairs placed in the same section.
    pub conflict_count: u32,
    /// Mutual friendships split across sections.
    pub broken_friendship_count: u32,
}

impl CandidateAssignment {
    /// Creates a candidate with zero counts.
    pub fn new(assignment: Assignment) -> Self {
        Self {
            assignment,
            conflict_count: 0,
            broken_friendship_count: 0,
        }
    }

    /// Sets the conflict count.
    pub fn with_conflicts(mut self, count: u32) -> Self {
        self.conflict_count = count;
        self
    }

    /// Sets the broken-friendship count.
    pub fn with_broken_friendships(mut self, count: u32) -> Self {
        self.broken_friendship_count = count;
        self
    }
}

/// A constraint-family heuristic producing one phase's raw candidates.
///
/// Implementations are concrete types selected through configuration —
/// never loaded from file paths at run time. The pipeline owns
/// everything after generation: completion, validation, scoring,
/// retention.
pub trait PhaseSolver: Send + Sync + Debug {
    /// Solver name (e.g., "teacher-children", "friendships").
    fn name(&self) -> &'static str;

    /// Produces up to `candidate_count` candidate placements.
    ///
    /// `previous` is one locked assignment from the preceding phase (or
    /// an all-unassigned one at phase 0). Placements already present in
    /// `previous` must be carried over, not overwritten: a solver only
    /// decides students that are still unassigned.
    fn generate(
        &self,
        roster: &Roster,
        previous: &Assignment,
        candidate_count: usize,
    ) -> Vec<CandidateAssignment>;

    /// Solver description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
