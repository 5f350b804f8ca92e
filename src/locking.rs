//! Completion locking: turning a partial assignment into a total one.
//!
//! Whatever a phase's solver leaves unplaced, the locker places — every
//! student ends up with exactly one section, and no section label is
//! invented beyond the pre-existing set or the bootstrap set.
//!
//! # Algorithm
//!
//! 1. Partition students into placed and unplaced.
//! 2. Nothing unplaced → the assignment is returned unchanged.
//! 3. Snapshot the population of each section among placed students.
//! 4. No section appears at all → bootstrap `ceil(n / threshold)`
//!    sections labelled `"A1".."An"`, each starting at population 0.
//! 5. Sort the section labels once, ascending by the population
//!    snapshot, ties by lexicographic label order.
//! 6. Walk the unplaced students in roster order; student *i* goes to
//!    section `i mod k` of the sorted list. The snapshot is never
//!    recomputed mid-loop, so the result is a pure function of
//!    (unplaced order, snapshot) — not an online load balancer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SectioningError};
use crate::models::{Assignment, Roster};

/// Default bootstrap threshold: one section per 25 students.
pub const DEFAULT_CLASS_SIZE_THRESHOLD: usize = 25;

/// Bookkeeping produced by a lock operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStats {
    /// Number of students in the roster.
    pub total_students: usize,
    /// Students that already had a section.
    pub already_placed: usize,
    /// Students placed by the locker.
    pub newly_placed: usize,
    /// Final population of each section.
    pub class_distribution: BTreeMap<String, usize>,
    /// Smallest final section size (0 when no sections exist).
    pub min_class_size: usize,
    /// Largest final section size (0 when no sections exist).
    pub max_class_size: usize,
}

/// Deterministically completes partial assignments.
///
/// # Example
///
/// ```
/// use sectioner::locking::CompletionLocker;
/// use sectioner::models::{Assignment, Gender, Roster, Student};
///
/// let roster = Roster::from_students(
///     (1..=4)
///         .map(|i| {
///             Student::new(format!("s{i}"))
///                 .with_gender(Gender::Boy)
///                 .with_language_proficient(true)
///                 .with_teacher_child(false)
///         })
///         .collect(),
/// )
/// .unwrap();
///
/// let mut partial = Assignment::empty(&roster);
/// partial.place("s1", "A1");
///
/// let locker = CompletionLocker::new();
/// let (total, stats) = locker.lock(&partial, &roster).unwrap();
/// assert!(total.is_total());
/// assert_eq!(stats.newly_placed, 3);
/// ```
#[derive(Debug, Clone)]
pub struct CompletionLocker {
    class_size_threshold: usize,
}

impl CompletionLocker {
    /// Creates a locker with the default bootstrap threshold.
    pub fn new() -> Self {
        Self {
            class_size_threshold: DEFAULT_CLASS_SIZE_THRESHOLD,
        }
    }

    /// Sets the bootstrap class-size threshold.
    pub fn with_class_size_threshold(mut self, threshold: usize) -> Self {
        self.class_size_threshold = threshold.max(1);
        self
    }

    /// Completes a partial assignment over the given roster.
    ///
    /// The input may be empty or partially filled; existing placements
    /// are never changed. Fails with
    /// [`SectioningError::StructuralMismatch`] if the assignment
    /// references an identity the roster does not contain.
    pub fn lock(&self, assignment: &Assignment, roster: &Roster) -> Result<(Assignment, LockStats)> {
        for id in assignment.ids() {
            if !roster.contains(id) {
                return Err(SectioningError::StructuralMismatch(format!(
                    "assignment references unknown student '{id}'"
                )));
            }
        }

        // Normalize to one entry per roster student, partitioning as we go.
        let mut result = Assignment::new();
        let mut unplaced: Vec<&str> = Vec::new();
        for student in roster.students() {
            match assignment.section_of(&student.id) {
                Some(section) => result.place(&student.id, section),
                None => unplaced.push(&student.id),
            }
        }
        let already_placed = roster.len() - unplaced.len();

        if unplaced.is_empty() {
            let class_distribution = result.section_populations();
            let stats = LockStats {
                total_students: roster.len(),
                already_placed,
                newly_placed: 0,
                min_class_size: class_distribution.values().min().copied().unwrap_or(0),
                max_class_size: class_distribution.values().max().copied().unwrap_or(0),
                class_distribution,
            };
            return Ok((result, stats));
        }

        // Population snapshot of the sections that already exist.
        let mut populations = result.section_populations();
        if populations.is_empty() {
            let count = roster.len().div_ceil(self.class_size_threshold);
            for i in 1..=count {
                populations.insert(format!("A{i}"), 0);
            }
        }

        // Sorted once: ascending population, lexicographic on ties.
        let mut order: Vec<(String, usize)> = populations.into_iter().collect();
        order.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        let labels: Vec<String> = order.into_iter().map(|(label, _)| label).collect();

        let newly_placed = unplaced.len();
        for (i, id) in unplaced.into_iter().enumerate() {
            let section = &labels[i % labels.len()];
            debug!(student = id, section = section.as_str(), "placing unassigned student");
            result.place(id, section);
        }

        let class_distribution = result.section_populations();
        let stats = LockStats {
            total_students: roster.len(),
            already_placed,
            newly_placed,
            min_class_size: class_distribution.values().min().copied().unwrap_or(0),
            max_class_size: class_distribution.values().max().copied().unwrap_or(0),
            class_distribution,
        };

        debug_assert!(result.is_total());
        Ok((result, stats))
    }
}

impl Default for CompletionLocker {
    fn default() -> Self {
        Self::new()
    }
}
