//! Assignment and roster validation.
//!
//! Pure checks, no mutation. [`validate_assignment`] summarizes an
//! assignment's completeness and balance; [`validate_roster`] reports
//! structural issues in the relation lists (unknown or self references)
//! without aborting anything — defective relations degrade solver
//! quality, they do not make a run impossible.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, ClassSizeStats, Roster};

/// Roster check result.
pub type RosterCheck = Result<(), Vec<RosterIssue>>;

/// Summary of an assignment's completeness and balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of entries in the assignment.
    pub total_students: usize,
    /// Entries with a section.
    pub assigned_count: usize,
    /// Entries without a section.
    pub unassigned_count: usize,
    /// Whether every entry has a section.
    pub is_complete: bool,
    /// Number of distinct sections in use.
    pub section_count: usize,
    /// Distinct section labels, sorted.
    pub sections: Vec<String>,
    /// Size statistics. Present only for complete assignments.
    pub class_size_stats: Option<ClassSizeStats>,
}

/// Summarizes an assignment.
///
/// Size statistics are computed only when the assignment is complete —
/// partial distributions would understate every section.
pub fn validate_assignment(assignment: &Assignment) -> ValidationReport {
    let total_students = assignment.student_count();
    let assigned_count = assignment.assigned_count();
    let unassigned_count = total_students - assigned_count;
    let is_complete = unassigned_count == 0;

    let populations = assignment.section_populations();
    let sections: Vec<String> = populations.keys().cloned().collect();

    let class_size_stats = if is_complete {
        let sizes: Vec<usize> = populations.values().copied().collect();
        ClassSizeStats::from_sizes(&sizes)
    } else {
        None
    };

    ValidationReport {
        total_students,
        assigned_count,
        unassigned_count,
        is_complete,
        section_count: sections.len(),
        sections,
        class_size_stats,
    }
}

/// A structural issue in a roster's relation lists.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterIssue {
    /// Issue category.
    pub kind: RosterIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssueKind {
    /// A friend list references an identity not in the roster.
    UnknownFriend,
    /// A conflict list references an identity not in the roster.
    UnknownConflict,
    /// A student lists themselves as friend or conflict.
    SelfReference,
}

impl RosterIssue {
    fn new(kind: RosterIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks the structural integrity of a roster's relation lists.
///
/// Identity uniqueness and required attributes are already enforced by
/// [`Roster::from_students`]; this covers what remains:
/// 1. Friend references point to existing students
/// 2. Conflict references point to existing students
/// 3. No student references themselves
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(issues)` with all detected issues.
pub fn validate_roster(roster: &Roster) -> RosterCheck {
    let mut issues = Vec::new();

    for student in roster.students() {
        for friend in &student.friends {
            if friend == &student.id {
                issues.push(RosterIssue::new(
                    RosterIssueKind::SelfReference,
                    format!("student '{}' lists themselves as a friend", student.id),
                ));
            } else if !roster.contains(friend) {
                issues.push(RosterIssue::new(
                    RosterIssueKind::UnknownFriend,
                    format!(
                        "student '{}' references unknown friend '{}'",
                        student.id, friend
                    ),
                ));
            }
        }

        for conflict in &student.conflicts {
            if conflict == &student.id {
                issues.push(RosterIssue::new(
                    RosterIssueKind::SelfReference,
                    format!("student '{}' lists themselves as a conflict", student.id),
                ));
            } else if !roster.contains(conflict) {
                issues.push(RosterIssue::new(
                    RosterIssueKind::UnknownConflict,
                    format!(
                        "student '{}' references unknown conflict '{}'",
                        student.id, conflict
                    ),
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Student};

    fn complete_student(id: &str) -> Student {
        Student::new(id)
            .with_gender(Gender::Boy)
            .with_language_proficient(true)
            .with_teacher_child(false)
    }

    fn make_roster(students: Vec<Student>) -> Roster {
        Roster::from_students(students).unwrap()
    }

    #[test]
    fn test_report_on_partial_assignment() {
        let roster = make_roster(vec![
            complete_student("a"),
            complete_student("b"),
            complete_student("c"),
        ]);
        let mut assignment = Assignment::empty(&roster);
        assignment.place("a", "A1");

        let report = validate_assignment(&assignment);
        assert_eq!(report.total_students, 3);
        assert_eq!(report.assigned_count, 1);
        assert_eq!(report.unassigned_count, 2);
        assert!(!report.is_complete);
        assert_eq!(report.section_count, 1);
        assert!(report.class_size_stats.is_none());
    }

    #[test]
    fn test_report_on_complete_assignment() {
        let roster = make_roster(vec![
            complete_student("a"),
            complete_student("b"),
            complete_student("c"),
            complete_student("d"),
        ]);
        let mut assignment = Assignment::empty(&roster);
        assignment.place("a", "A1");
        assignment.place("b", "A1");
        assignment.place("c", "A2");
        assignment.place("d", "A2");

        let report = validate_assignment(&assignment);
        assert!(report.is_complete);
        assert_eq!(report.sections, vec!["A1", "A2"]);

        let stats = report.class_size_stats.unwrap();
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 2);
        assert!((stats.mean - 2.0).abs() < 1e-10);
        assert!((stats.stddev - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_on_empty_assignment() {
        let report = validate_assignment(&Assignment::new());
        assert_eq!(report.total_students, 0);
        assert!(report.is_complete);
        assert_eq!(report.section_count, 0);
        // Complete but sectionless: no sizes to summarize.
        assert!(report.class_size_stats.is_none());
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let roster = make_roster(vec![complete_student("a")]);
        let assignment = Assignment::empty(&roster);
        let before = assignment.clone();
        let _ = validate_assignment(&assignment);
        assert_eq!(assignment, before);
    }

    #[test]
    fn test_valid_roster_relations() {
        let roster = make_roster(vec![
            complete_student("a").with_friend("b"),
            complete_student("b").with_conflict("a"),
        ]);
        assert!(validate_roster(&roster).is_ok());
    }

    #[test]
    fn test_unknown_friend_reference() {
        let roster = make_roster(vec![complete_student("a").with_friend("ghost")]);
        let issues = validate_roster(&roster).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::UnknownFriend && i.message.contains("ghost")));
    }

    #[test]
    fn test_unknown_conflict_reference() {
        let roster = make_roster(vec![complete_student("a").with_conflict("ghost")]);
        let issues = validate_roster(&roster).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::UnknownConflict));
    }

    #[test]
    fn test_self_reference() {
        let roster = make_roster(vec![complete_student("a").with_friend("a")]);
        let issues = validate_roster(&roster).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.kind == RosterIssueKind::SelfReference));
    }

    #[test]
    fn test_multiple_issues_accumulate() {
        let roster = make_roster(vec![
            complete_student("a").with_friend("ghost"),
            complete_student("b").with_conflict("b"),
        ]);
        let issues = validate_roster(&roster).unwrap_err();
        assert!(issues.len() >= 2);
    }
}
