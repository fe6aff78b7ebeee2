//! Training catalog contract.
//!
//! The catalog stores training definitions per role and is an external
//! collaborator of the engine; the planner only needs the role-filtered
//! listing. `MemoryCatalog` is the reference implementation, also used
//! by tests and by callers that load definitions from elsewhere.

use serde::{Deserialize, Serialize};

use crate::models::TrainingItem;

/// Read access to training definitions, filtered by role.
pub trait TrainingCatalog {
    /// All items whose role is in `roles`, in catalog order.
    fn list_by_roles(&self, roles: &[String]) -> Vec<TrainingItem>;
}

/// In-memory training catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCatalog {
    items: Vec<TrainingItem>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item.
    pub fn with_item(mut self, item: TrainingItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds many items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = TrainingItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[TrainingItem] {
        &self.items
    }

    /// Distinct roles present in the catalog, in first-appearance order.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for item in &self.items {
            if !roles.contains(&item.role.as_str()) {
                roles.push(&item.role);
            }
        }
        roles
    }

    /// Sum of training durations for one role (minutes).
    pub fn total_duration_for_role(&self, role: &str) -> i64 {
        self.items
            .iter()
            .filter(|i| i.role == role)
            .map(|i| i.duration_min)
            .sum()
    }
}

impl TrainingCatalog for MemoryCatalog {
    fn list_by_roles(&self, roles: &[String]) -> Vec<TrainingItem> {
        self.items
            .iter()
            .filter(|item| roles.iter().any(|r| r == &item.role))
            .cloned()
            .collect()
    }
}
