//! Built-in phase solvers.
//!
//! The constraint-family heuristics of a real deployment (teacher-child
//! balance, behavioral balance, friendship grouping) live outside this
//! crate; what ships here are the structural solvers the pipeline itself
//! needs.

use crate::models::{Assignment, Roster};

use super::{CandidateAssignment, PhaseSolver};

/// Carries the previous phase's placements forward unchanged.
///
/// Produces a single candidate per in-flight scenario regardless of the
/// requested count — there is only one way to change nothing. Useful as
/// the residual-placement phase (the completion locker does the actual
/// placing) and as a neutral element when wiring pipelines in tests.
#[derive(Debug, Clone, Copy)]
pub struct Passthrough;

impl PhaseSolver for Passthrough {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn generate(
        &self,
        _roster: &Roster,
        previous: &Assignment,
        _candidate_count: usize,
    ) -> Vec<CandidateAssignment> {
        vec![CandidateAssignment::new(previous.clone())]
    }

    fn description(&self) -> &'static str {
        "Carries previous placements forward; unplaced students fall to the locker"
    }
}
