use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for a class. Wraps a v4 UUID so class and assignment ids
/// cannot be mixed up at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(Uuid);

impl ClassId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClassId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ClassId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier for an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(Uuid);

impl AssignmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AssignmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named course/subject that assignments belong to
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
}

impl Class {
    /// Create a class with a fresh id. The name is expected to be
    /// already trimmed and non-empty.
    pub fn new(name: String) -> Self {
        Self {
            id: ClassId::new(),
            name,
        }
    }
}

/// A due-dated task linked to exactly one class
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Assignment {
    pub id: AssignmentId,

    /// Task description
    pub name: String,

    /// Due date (calendar day, no time component)
    pub due: NaiveDate,

    /// The class this assignment belongs to
    pub class_id: ClassId,

    /// Whether the assignment has been marked done
    pub completed: bool,
}

impl Assignment {
    /// Create a pending assignment with a fresh id.
    pub fn new(name: String, due: NaiveDate, class_id: ClassId) -> Self {
        Self {
            id: AssignmentId::new(),
            name,
            due,
            class_id,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_class_ids_are_unique() {
        assert_ne!(ClassId::new(), ClassId::new());
        assert_ne!(AssignmentId::new(), AssignmentId::new());
    }

    #[test]
    fn test_class_id_display_roundtrip() {
        let id = ClassId::new();
        let parsed: ClassId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_assignment_id_display_roundtrip() {
        let id = AssignmentId::new();
        let parsed: AssignmentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<ClassId>().is_err());
        assert!("".parse::<AssignmentId>().is_err());
    }

    #[test]
    fn test_class_new() {
        let class = Class::new("Biology".to_string());
        assert_eq!(class.name, "Biology");
    }

    #[test]
    fn test_assignment_new_starts_pending() {
        let class = Class::new("Biology".to_string());
        let assignment =
            Assignment::new("Lab report".to_string(), date(2025, 3, 5), class.id);

        assert_eq!(assignment.name, "Lab report");
        assert_eq!(assignment.due, date(2025, 3, 5));
        assert_eq!(assignment.class_id, class.id);
        assert!(!assignment.completed);
    }

    #[test]
    fn test_class_serialization() {
        let class = Class::new("Biology".to_string());
        let json = serde_json::to_string(&class).unwrap();

        assert!(json.contains("\"name\":\"Biology\""));
        // Ids serialize transparently as the uuid string
        assert!(json.contains(&format!("\"id\":\"{}\"", class.id)));
    }

    #[test]
    fn test_assignment_serialization_roundtrip() {
        let class = Class::new("Storia".to_string());
        let original =
            Assignment::new("Leggere capitolo 3".to_string(), date(2025, 1, 15), class.id);

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Assignment = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_assignment_due_serializes_as_iso_date() {
        let class = Class::new("Math".to_string());
        let assignment = Assignment::new("Es. 1-5".to_string(), date(2025, 1, 15), class.id);

        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"due\":\"2025-01-15\""));
    }
}
