//! Structured failure taxonomy.
//!
//! Every failure mode of the pipeline is a typed variant. Pure components
//! return these rather than partial or ambiguous state, and the runner
//! aborts the entire run on any of them: a class roster must never be
//! silently incomplete.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SectioningError>;

/// Failure modes of the sectioning pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectioningError {
    /// A required student attribute is absent from the roster.
    #[error("student '{student}' is missing required attribute '{attribute}'")]
    MissingColumn {
        /// Identity of the offending student.
        student: String,
        /// Name of the absent attribute.
        attribute: &'static str,
    },

    /// Two students share the same identity.
    #[error("duplicate student identity '{0}'")]
    DuplicateIdentifier(String),

    /// A phase's solver yielded zero candidates.
    #[error("phase {phase} produced no candidate assignments")]
    NoCandidates {
        /// Index of the failing phase.
        phase: usize,
    },

    /// A locked scenario still has unassigned students.
    ///
    /// The completion locker guarantees totality, so this indicates an
    /// internal bug and is always fatal.
    #[error("phase {phase} left {unassigned} students unassigned after locking")]
    IncompleteAssignment {
        /// Index of the failing phase.
        phase: usize,
        /// Number of students without a section.
        unassigned: usize,
    },

    /// The selector was invoked with no records.
    #[error("cannot select a winner from an empty scenario set")]
    EmptyCandidateSet,

    /// An assignment and its roster disagree in a way the bootstrap rule
    /// cannot reconcile.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// The run was cancelled while a phase was in flight.
    #[error("run cancelled during phase {phase}")]
    RunCancelled {
        /// Index of the phase that was interrupted.
        phase: usize,
    },
}
