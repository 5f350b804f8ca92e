//! Assignment model: student → section placements.
//!
//! An assignment maps every known student identity to either a section
//! label or "unassigned". Section labels are plain strings; a section's
//! population is always derived from the assignment, never stored
//! independently, so the two cannot drift apart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Roster;

/// A (possibly partial) mapping from students to class sections.
///
/// Entries with `None` are unassigned. A *total* assignment has no
/// unassigned entries. Built from a roster so that totality questions
/// are answerable from the assignment alone.
///
/// # Example
///
/// ```
/// use sectioner::models::{Assignment, Gender, Roster, Student};
///
/// let roster = Roster::from_students(vec![
///     Student::new("maria")
///         .with_gender(Gender::Girl)
///         .with_language_proficient(true)
///         .with_teacher_child(false),
/// ])
/// .unwrap();
///
/// let mut assignment = Assignment::empty(&roster);
/// assert!(!assignment.is_total());
/// assignment.place("maria", "A1");
/// assert!(assignment.is_total());
/// assert_eq!(assignment.section_of("maria"), Some("A1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    placements: BTreeMap<String, Option<String>>,
}

impl Assignment {
    /// Creates an assignment with no entries at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assignment covering every roster student, all unassigned.
    pub fn empty(roster: &Roster) -> Self {
        Self {
            placements: roster.ids().map(|id| (id.to_string(), None)).collect(),
        }
    }

    /// Places a student in a section.
    pub fn place(&mut self, id: impl Into<String>, section: impl Into<String>) {
        self.placements.insert(id.into(), Some(section.into()));
    }

    /// Marks a student as present but unassigned.
    pub fn mark_unassigned(&mut self, id: impl Into<String>) {
        self.placements.entry(id.into()).or_insert(None);
    }

    /// Section label for a student, if placed.
    pub fn section_of(&self, id: &str) -> Option<&str> {
        self.placements.get(id).and_then(|s| s.as_deref())
    }

    /// Whether the assignment has an entry (assigned or not) for a student.
    pub fn contains_student(&self, id: &str) -> bool {
        self.placements.contains_key(id)
    }

    /// Number of entries.
    pub fn student_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of placed entries.
    pub fn assigned_count(&self) -> usize {
        self.placements.values().filter(|s| s.is_some()).count()
    }

    /// Number of unassigned entries.
    pub fn unassigned_count(&self) -> usize {
        self.placements.values().filter(|s| s.is_none()).count()
    }

    /// Whether every entry is placed.
    pub fn is_total(&self) -> bool {
        self.placements.values().all(|s| s.is_some())
    }

    /// Entries in lexicographic identity order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.placements
            .iter()
            .map(|(id, s)| (id.as_str(), s.as_deref()))
    }

    /// Identities in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.placements.keys().map(String::as_str)
    }

    /// Population of each section, derived from the placements.
    pub fn section_populations(&self) -> BTreeMap<String, usize> {
        let mut populations = BTreeMap::new();
        for section in self.placements.values().flatten() {
            *populations.entry(section.clone()).or_insert(0) += 1;
        }
        populations
    }

    /// Distinct section labels, sorted.
    pub fn sections(&self) -> Vec<String> {
        self.section_populations().into_keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Student};

    fn sample_roster(ids: &[&str]) -> Roster {
        Roster::from_students(
            ids.iter()
                .map(|id| {
                    Student::new(*id)
                        .with_gender(Gender::Boy)
                        .with_language_proficient(true)
                        .with_teacher_child(false)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_covers_roster() {
        let roster = sample_roster(&["a", "b", "c"]);
        let assignment = Assignment::empty(&roster);

        assert_eq!(assignment.student_count(), 3);
        assert_eq!(assignment.assigned_count(), 0);
        assert_eq!(assignment.unassigned_count(), 3);
        assert!(!assignment.is_total());
    }

    #[test]
    fn test_place_and_query() {
        let roster = sample_roster(&["a", "b"]);
        let mut assignment = Assignment::empty(&roster);
        assignment.place("a", "A1");

        assert_eq!(assignment.section_of("a"), Some("A1"));
        assert_eq!(assignment.section_of("b"), None);
        assert_eq!(assignment.assigned_count(), 1);
        assert_eq!(assignment.unassigned_count(), 1);

        assignment.place("b", "A2");
        assert!(assignment.is_total());
    }

    #[test]
    fn test_section_populations_are_derived() {
        let roster = sample_roster(&["a", "b", "c", "d"]);
        let mut assignment = Assignment::empty(&roster);
        assignment.place("a", "A1");
        assignment.place("b", "A1");
        assignment.place("c", "A2");

        let populations = assignment.section_populations();
        assert_eq!(populations["A1"], 2);
        assert_eq!(populations["A2"], 1);
        assert_eq!(assignment.sections(), vec!["A1", "A2"]);
    }

    #[test]
    fn test_mark_unassigned_keeps_existing_placement() {
        let mut assignment = Assignment::new();
        assignment.place("a", "A1");
        assignment.mark_unassigned("a");
        assert_eq!(assignment.section_of("a"), Some("A1"));

        assignment.mark_unassigned("b");
        assert_eq!(assignment.section_of("b"), None);
        assert!(assignment.contains_student("b"));
    }

    #[test]
    fn test_assignment_serde_round_trip() {
        let roster = sample_roster(&["a", "b"]);
        let mut assignment = Assignment::empty(&roster);
        assignment.place("a", "A1");

        let json = serde_json::to_string(&assignment).unwrap();
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assignment);
    }
}
