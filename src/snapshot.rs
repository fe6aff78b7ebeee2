//! Persisted planner state.
//!
//! One `Snapshot` captures everything a planning session needs to
//! survive a reload: the selected roles, the optional weekly grid, and
//! the instructor color table. The physical store is external; this
//! module only defines the layout, the JSON codec, and the load/save
//! contract over opaque payloads.
//!
//! A malformed payload is never fatal: [`Snapshot::from_json_lossy`]
//! logs a warning and falls back to "no schedule."

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

use crate::models::WeekSchedule;
use crate::palette::InstructorPalette;

/// Errors raised by the snapshot codec.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not a valid snapshot document.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable planner state: selected roles, grid, and color table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Roles selected for the current planning cycle.
    pub selected_roles: Vec<String>,
    /// The weekly grid, or `None` when no schedule is generated.
    pub schedule: Option<WeekSchedule>,
    /// Instructor color table.
    pub colors: InstructorPalette,
}

impl Snapshot {
    /// Creates an empty snapshot (no roles, no schedule, no colors).
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to a JSON payload.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON payload, reporting malformed input.
    pub fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Parses a JSON payload, degrading malformed input to `None` with
    /// a warning instead of an error. Callers fall back to the "no
    /// schedule" state.
    pub fn from_json_lossy(payload: &str) -> Option<Self> {
        match Self::from_json(payload) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("discarding persisted snapshot: {err}");
                None
            }
        }
    }
}

/// Load/save contract over opaque payloads, keyed by name.
///
/// Payload contents are the codec's concern; a store only moves bytes.
pub trait SnapshotStore {
    /// Loads the payload stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;
    /// Stores `payload` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, payload: String);
}

/// In-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, payload: String) {
        self.entries.insert(key.to_string(), payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::Allocator;
    use crate::models::TrainingItem;

    fn sample_snapshot() -> Snapshot {
        let items = vec![
            TrainingItem::new("T1", "Driver", "Safety", 120, "Ana"),
            TrainingItem::new("T2", "Driver", "Routes", 60, "Bruno"),
        ];
        let allocation = Allocator::new().allocate(&items).unwrap();
        let mut colors = InstructorPalette::new();
        colors.color_for("Ana");
        colors.set_color("Bruno", "#abcdef");

        Snapshot {
            selected_roles: vec!["Driver".to_string()],
            schedule: Some(allocation.schedule),
            colors,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = sample_snapshot();
        let json = snapshot.to_json().unwrap();
        let back = Snapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_empty_snapshot_round_trip() {
        let snapshot = Snapshot::new();
        let back = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back.schedule, None);
        assert!(back.selected_roles.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_error() {
        let err = Snapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn test_lossy_decode_falls_back() {
        assert!(Snapshot::from_json_lossy("{\"schedule\": 42}").is_none());
        assert!(Snapshot::from_json_lossy("garbage").is_none());

        let snapshot = sample_snapshot();
        let restored = Snapshot::from_json_lossy(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("planner"), None);

        store.save("planner", "payload-1".to_string());
        assert_eq!(store.load("planner").as_deref(), Some("payload-1"));

        store.save("planner", "payload-2".to_string());
        assert_eq!(store.load("planner").as_deref(), Some("payload-2"));
    }
}
