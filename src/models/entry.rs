//! Schedule entry model.
//!
//! A `ScheduleEntry` is a placeable unit derived from one or more
//! training items: Individual items map one-to-one, Group items sharing
//! a name and instructor collapse into a single entry serving all of
//! their roles in one sitting.

use serde::{Deserialize, Serialize};

use super::{SessionType, TrainingItem};

/// A placed (or placeable) unit in the weekly grid.
///
/// `start_min`/`end_min` are presentation fields derived from the slot
/// the entry sits in; they are `None` until the entry is seated and for
/// entries reported unplaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Entry identifier. For merged Group entries this is the first
    /// contributing item's ID, which keeps it stable for a given input.
    pub id: String,
    /// IDs of the training items collapsed into this entry.
    pub source_ids: Vec<String>,
    /// Roles this entry satisfies, in merge order, deduplicated.
    /// Size 1 for Individual entries.
    pub roles: Vec<String>,
    /// Training name.
    pub name: String,
    /// Session length in minutes. One sitting serves all roles, so the
    /// duration is never multiplied by the number of merged roles.
    pub duration_min: i64,
    /// Responsible instructor.
    pub instructor: String,
    /// Delivery type carried from the source items.
    pub session_type: SessionType,
    /// Derived start time (minutes since midnight), if seated.
    pub start_min: Option<i64>,
    /// Derived end time (minutes since midnight), if seated.
    pub end_min: Option<i64>,
}

impl ScheduleEntry {
    /// Creates an unseated Individual entry for a single role.
    pub fn individual(
        id: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
        duration_min: i64,
        instructor: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            source_ids: vec![id.clone()],
            id,
            roles: vec![role.into()],
            name: name.into(),
            duration_min,
            instructor: instructor.into(),
            session_type: SessionType::Individual,
            start_min: None,
            end_min: None,
        }
    }

    /// Creates an unseated entry from a single training item.
    pub fn from_item(item: &TrainingItem) -> Self {
        Self {
            id: item.id.clone(),
            source_ids: vec![item.id.clone()],
            roles: vec![item.role.clone()],
            name: item.name.clone(),
            duration_min: item.duration_min,
            instructor: item.instructor.clone(),
            session_type: item.session_type,
            start_min: None,
            end_min: None,
        }
    }

    /// Folds another Group item into this entry.
    ///
    /// Only called for items sharing this entry's name and instructor.
    /// The role is appended unless already present; duration stays that
    /// of the shared sitting.
    pub fn absorb(&mut self, item: &TrainingItem) {
        self.source_ids.push(item.id.clone());
        if !self.roles.contains(&item.role) {
            self.roles.push(item.role.clone());
        }
    }

    /// Whether this entry serves the given role.
    pub fn serves_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_item() {
        let item = TrainingItem::new("T1", "Driver", "Safety", 90, "Ana").group();
        let entry = ScheduleEntry::from_item(&item);
        assert_eq!(entry.id, "T1");
        assert_eq!(entry.source_ids, vec!["T1"]);
        assert_eq!(entry.roles, vec!["Driver"]);
        assert_eq!(entry.session_type, SessionType::Group);
        assert_eq!(entry.start_min, None);
    }

    #[test]
    fn test_absorb_accumulates_roles() {
        let first = TrainingItem::new("T1", "Driver", "Safety", 90, "Ana").group();
        let second = TrainingItem::new("T2", "Operator", "Safety", 90, "Ana").group();

        let mut entry = ScheduleEntry::from_item(&first);
        entry.absorb(&second);

        assert_eq!(entry.source_ids, vec!["T1", "T2"]);
        assert_eq!(entry.roles, vec!["Driver", "Operator"]);
        // One sitting serves both roles.
        assert_eq!(entry.duration_min, 90);
        assert!(entry.serves_role("Operator"));
        assert!(!entry.serves_role("Welder"));
    }

    #[test]
    fn test_absorb_deduplicates_role() {
        let first = TrainingItem::new("T1", "Driver", "Safety", 90, "Ana").group();
        let dup = TrainingItem::new("T2", "Driver", "Safety", 90, "Ana").group();

        let mut entry = ScheduleEntry::from_item(&first);
        entry.absorb(&dup);

        assert_eq!(entry.roles, vec!["Driver"]);
        assert_eq!(entry.source_ids.len(), 2);
    }
}
