//! In-memory planner state and the command operations that mutate it.
//!
//! The planner owns the two collections (classes and assignments) for the
//! running session. Views are derived from the current snapshot on every
//! render and never cached.

use chrono::NaiveDate;

use crate::types::{Assignment, AssignmentId, Class, ClassId};

/// Fallback label when an assignment points at a class that no longer
/// exists. Unreachable as long as class deletion cascades.
const UNKNOWN_CLASS: &str = "Unknown class";

/// Session state: every mutation goes through one of the command methods
/// below, so the cascade invariant (no assignment without its class) holds
/// between any two calls.
#[derive(Debug, Default)]
pub struct Planner {
    classes: Vec<Class>,
    assignments: Vec<Assignment>,
    /// Class remembered by the assignment entry form.
    selected: Option<ClassId>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- commands ----

    /// Add a class with the given name, trimmed. Blank names are a no-op.
    /// Returns the new id when a class was created.
    pub fn add_class(&mut self, name: &str) -> Option<ClassId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let class = Class::new(name.to_string());
        let id = class.id;
        self.classes.push(class);
        Some(id)
    }

    /// Delete a class and every assignment that belongs to it. Clears the
    /// remembered form selection if it pointed at the deleted class.
    /// Returns false if no class had that id.
    pub fn delete_class(&mut self, id: ClassId) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != id);
        if self.classes.len() == before {
            return false;
        }

        self.assignments.retain(|a| a.class_id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Add a pending assignment. The name is trimmed; blank names and
    /// unknown class ids are a no-op. On success the class becomes the
    /// remembered selection for the entry form.
    pub fn add_assignment(
        &mut self,
        name: &str,
        due: NaiveDate,
        class_id: ClassId,
    ) -> Option<AssignmentId> {
        let name = name.trim();
        if name.is_empty() || !self.has_class(class_id) {
            return None;
        }

        let assignment = Assignment::new(name.to_string(), due, class_id);
        let id = assignment.id;
        self.assignments.push(assignment);
        self.selected = Some(class_id);
        Some(id)
    }

    /// Flip completion on the matching assignment. No effect if not found.
    pub fn toggle_assignment(&mut self, id: AssignmentId) -> bool {
        match self.assignments.iter_mut().find(|a| a.id == id) {
            Some(assignment) => {
                assignment.completed = !assignment.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching assignment. No effect if not found.
    pub fn delete_assignment(&mut self, id: AssignmentId) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        self.assignments.len() != before
    }

    // ---- snapshot accessors ----

    /// Classes in insertion order.
    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Class remembered by the assignment entry form, if any.
    pub fn selected_class(&self) -> Option<ClassId> {
        self.selected
    }

    pub fn has_class(&self, id: ClassId) -> bool {
        self.classes.iter().any(|c| c.id == id)
    }

    // ---- derivations ----

    /// Pending assignments sorted ascending by due date. The sort is
    /// stable, so assignments due the same day keep insertion order.
    pub fn pending_sorted(&self) -> Vec<&Assignment> {
        let mut pending: Vec<&Assignment> =
            self.assignments.iter().filter(|a| !a.completed).collect();
        pending.sort_by_key(|a| a.due);
        pending
    }

    /// Completed assignments in insertion order.
    pub fn completed(&self) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.completed).collect()
    }

    /// Name of the class with the given id, or a fallback label.
    pub fn class_name(&self, id: ClassId) -> &str {
        self.classes
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CLASS)
    }

    /// Total and pending assignment counts for a class card.
    pub fn class_stats(&self, id: ClassId) -> (usize, usize) {
        let mut total = 0;
        let mut pending = 0;
        for a in self.assignments.iter().filter(|a| a.class_id == id) {
            total += 1;
            if !a.completed {
                pending += 1;
            }
        }
        (total, pending)
    }
}
