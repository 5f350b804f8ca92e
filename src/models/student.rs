//! Student model.
//!
//! A student is the unit of placement: a unique identity plus the
//! fixed-domain attributes the phase solvers balance on, and optional
//! free-form relations (desired friends, conflicts).

use serde::{Deserialize, Serialize};

/// Student gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male student.
    Boy,
    /// Female student.
    Girl,
}

/// A student to be placed in a class section.
///
/// The required attributes (`gender`, `language_proficient`,
/// `teacher_child`) are `Option` so that a roster built from a defective
/// upstream row can be rejected instead of silently defaulted;
/// [`Roster::from_students`](super::Roster::from_students) enforces their
/// presence. The optional flags default to `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identity within a roster.
    pub id: String,
    /// Gender. Required.
    pub gender: Option<Gender>,
    /// Language-proficiency flag. Required.
    pub language_proficient: Option<bool>,
    /// Teacher-child flag. Required.
    pub teacher_child: Option<bool>,
    /// Energetic flag.
    pub energetic: bool,
    /// Special-needs flag.
    pub special_needs: bool,
    /// Identities of desired friends.
    pub friends: Vec<String>,
    /// Identities of students this one must not share a section with.
    pub conflicts: Vec<String>,
}

impl Student {
    /// Creates a new student with the given identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gender: None,
            language_proficient: None,
            teacher_child: None,
            energetic: false,
            special_needs: false,
            friends: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the language-proficiency flag.
    pub fn with_language_proficient(mut self, proficient: bool) -> Self {
        self.language_proficient = Some(proficient);
        self
    }

    /// Sets the teacher-child flag.
    pub fn with_teacher_child(mut self, teacher_child: bool) -> Self {
        self.teacher_child = Some(teacher_child);
        self
    }

    /// Sets the energetic flag.
    pub fn with_energetic(mut self, energetic: bool) -> Self {
        self.energetic = energetic;
        self
    }

    /// Sets the special-needs flag.
    pub fn with_special_needs(mut self, special_needs: bool) -> Self {
        self.special_needs = special_needs;
        self
    }

    /// Adds a desired friend.
    pub fn with_friend(mut self, id: impl Into<String>) -> Self {
        self.friends.push(id.into());
        self
    }

    /// Adds a conflicting student.
    pub fn with_conflict(mut self, id: impl Into<String>) -> Self {
        self.conflicts.push(id.into());
        self
    }

    /// Name of the first absent required attribute, if any.
    pub fn missing_required_attribute(&self) -> Option<&'static str> {
        if self.gender.is_none() {
            Some("gender")
        } else if self.language_proficient.is_none() {
            Some("language_proficient")
        } else if self.teacher_child.is_none() {
            Some("teacher_child")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let student = Student::new("maria")
            .with_gender(Gender::Girl)
            .with_language_proficient(true)
            .with_teacher_child(false)
            .with_energetic(true)
            .with_friend("eleni")
            .with_conflict("nikos");

        assert_eq!(student.id, "maria");
        assert_eq!(student.gender, Some(Gender::Girl));
        assert_eq!(student.language_proficient, Some(true));
        assert_eq!(student.teacher_child, Some(false));
        assert!(student.energetic);
        assert!(!student.special_needs);
        assert_eq!(student.friends, vec!["eleni".to_string()]);
        assert_eq!(student.conflicts, vec!["nikos".to_string()]);
    }

    #[test]
    fn test_missing_required_attribute() {
        let student = Student::new("s1");
        assert_eq!(student.missing_required_attribute(), Some("gender"));

        let student = student.with_gender(Gender::Boy);
        assert_eq!(
            student.missing_required_attribute(),
            Some("language_proficient")
        );

        let student = student.with_language_proficient(false);
        assert_eq!(student.missing_required_attribute(), Some("teacher_child"));

        let student = student.with_teacher_child(true);
        assert_eq!(student.missing_required_attribute(), None);
    }

    #[test]
    fn test_student_serde_round_trip() {
        let student = Student::new("s1")
            .with_gender(Gender::Boy)
            .with_language_proficient(true)
            .with_teacher_child(false);

        let json = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "s1");
        assert_eq!(back.gender, Some(Gender::Boy));
    }
}
