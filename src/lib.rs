//! Student sectioning pipeline.
//!
//! Assigns a roster of students to class sections through a sequence of
//! constraint-refinement phases. Each phase produces several candidate
//! assignments ("scenarios"); every candidate is completed (no student
//! left unplaced), validated, and scored, and a single winner is selected
//! deterministically at the terminal phase.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Roster`, `Assignment`,
//!   `ScenarioRecord`, `ScenarioMetrics`, `ClassSizeStats`
//! - **`locking`**: `CompletionLocker` — turns a partial assignment into
//!   a total one, deterministically
//! - **`validation`**: Completeness and balance reporting, roster
//!   integrity checks
//! - **`selection`**: Penalty-ranked winner selection with deterministic
//!   tie-breaking
//! - **`pipeline`**: Phase orchestration — `PhaseSolver`, `PhaseRunner`,
//!   `Pipeline`, `PipelineContext`
//! - **`error`**: Structured failure taxonomy
//!
//! # Architecture
//!
//! The crate is the bookkeeping layer around whatever heuristic produces
//! each phase's raw candidates: solvers implement [`pipeline::PhaseSolver`]
//! and hand back partial placements with their own quality counts; the
//! pipeline guarantees totality, consistency, and a deterministic final
//! choice. Candidate processing within a phase is parallel and
//! side-effect free.

pub mod error;
pub mod locking;
pub mod models;
pub mod pipeline;
pub mod selection;
pub mod validation;
