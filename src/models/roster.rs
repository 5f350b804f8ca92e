//! Roster: the canonical student table.
//!
//! Built once per run. Construction enforces identity uniqueness and the
//! presence of required attributes, so every later lookup by identity is
//! unambiguous and no downstream component needs to re-check the input.
//! Input order is preserved: it drives deterministic placement in the
//! completion locker.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, SectioningError};

use super::Student;

/// The canonical table of students shared by all phases.
///
/// # Example
///
/// ```
/// use sectioner::models::{Gender, Roster, Student};
///
/// let roster = Roster::from_students(vec![
///     Student::new("maria")
///         .with_gender(Gender::Girl)
///         .with_language_proficient(true)
///         .with_teacher_child(false),
/// ])
/// .unwrap();
/// assert_eq!(roster.len(), 1);
/// assert!(roster.contains("maria"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    students: Vec<Student>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, enforcing data integrity.
    ///
    /// Fails with [`SectioningError::MissingColumn`] if any student lacks
    /// a required attribute and with
    /// [`SectioningError::DuplicateIdentifier`] if two students share an
    /// identity. A duplicate would otherwise make lookup-by-identity bind
    /// silently to the first match.
    pub fn from_students(students: Vec<Student>) -> Result<Self> {
        let mut index = HashMap::with_capacity(students.len());

        for (i, student) in students.iter().enumerate() {
            if let Some(attribute) = student.missing_required_attribute() {
                return Err(SectioningError::MissingColumn {
                    student: student.id.clone(),
                    attribute,
                });
            }
            if index.insert(student.id.clone(), i).is_some() {
                return Err(SectioningError::DuplicateIdentifier(student.id.clone()));
            }
        }

        Ok(Self { students, index })
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in roster order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Looks up a student by identity.
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&i| &self.students[i])
    }

    /// Whether the roster contains the given identity.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Identities in roster order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(|s| s.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn complete_student(id: &str) -> Student {
        Student::new(id)
            .with_gender(Gender::Boy)
            .with_language_proficient(true)
            .with_teacher_child(false)
    }

    #[test]
    fn test_roster_construction() {
        let roster = Roster::from_students(vec![
            complete_student("a"),
            complete_student("b"),
            complete_student("c"),
        ])
        .unwrap();

        assert_eq!(roster.len(), 3);
        assert!(roster.contains("b"));
        assert!(!roster.contains("z"));
        assert_eq!(roster.get("c").unwrap().id, "c");
        assert_eq!(roster.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let err = Roster::from_students(vec![
            complete_student("a"),
            complete_student("b"),
            complete_student("a"),
        ])
        .unwrap_err();

        assert_eq!(err, SectioningError::DuplicateIdentifier("a".into()));
    }

    #[test]
    fn test_missing_required_attribute_rejected() {
        let err = Roster::from_students(vec![
            complete_student("a"),
            Student::new("b").with_gender(Gender::Girl),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            SectioningError::MissingColumn {
                student: "b".into(),
                attribute: "language_proficient",
            }
        );
    }

    #[test]
    fn test_roster_preserves_input_order() {
        let roster = Roster::from_students(vec![
            complete_student("zeta"),
            complete_student("alpha"),
            complete_student("mu"),
        ])
        .unwrap();

        let order: Vec<_> = roster.ids().collect();
        assert_eq!(order, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::from_students(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }
}
