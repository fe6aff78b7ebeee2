//! Weekly schedule (grid) model.
//!
//! A `WeekSchedule` is the complete 5×2 grid of slots. All ten slots
//! always exist, even when empty; "no schedule generated" is expressed
//! by the caller holding `Option<WeekSchedule>`, never by a partial
//! grid.

use serde::{Deserialize, Serialize};

use super::{ScheduleEntry, Slot, SlotId};

/// The full weekly grid: one slot per (day, period) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// All ten slots, in traversal order (Monday-Morning first).
    slots: Vec<Slot>,
}

impl WeekSchedule {
    /// Creates an empty grid with all ten slots materialized.
    pub fn new() -> Self {
        Self {
            slots: SlotId::week_order().map(Slot::new).collect(),
        }
    }

    /// Borrows the slot for the given cell.
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    /// Mutably borrows the slot for the given cell.
    pub fn slot_mut(&mut self, id: SlotId) -> &mut Slot {
        &mut self.slots[id.index()]
    }

    /// Iterates over all slots in traversal order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Total number of entries across the whole grid.
    pub fn entry_count(&self) -> usize {
        self.slots.iter().map(|s| s.entries.len()).sum()
    }

    /// Finds an entry anywhere in the grid by its ID.
    pub fn find_entry(&self, entry_id: &str) -> Option<(SlotId, &ScheduleEntry)> {
        self.slots.iter().find_map(|slot| {
            slot.entries
                .iter()
                .find(|e| e.id == entry_id)
                .map(|e| (slot.id, e))
        })
    }

    /// Whether any slot contains the given entry ID.
    pub fn contains_entry(&self, entry_id: &str) -> bool {
        self.find_entry(entry_id).is_some()
    }

    /// All source item IDs represented somewhere in the grid.
    pub fn source_ids(&self) -> Vec<&str> {
        self.slots
            .iter()
            .flat_map(|s| s.entries.iter())
            .flat_map(|e| e.source_ids.iter())
            .map(String::as_str)
            .collect()
    }

    /// Recomputes start/end times in every slot.
    pub fn retime(&mut self) {
        for slot in &mut self.slots {
            slot.retime();
        }
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, ScheduleEntry};

    fn entry(id: &str, duration_min: i64) -> ScheduleEntry {
        ScheduleEntry::individual(id, "Role", "Training", duration_min, "Instructor")
    }

    #[test]
    fn test_all_slots_exist_when_empty() {
        let schedule = WeekSchedule::new();
        let slots: Vec<_> = schedule.slots().collect();
        assert_eq!(slots.len(), 10);
        assert!(slots.iter().all(|s| s.entries.is_empty()));
        assert_eq!(schedule.entry_count(), 0);
    }

    #[test]
    fn test_find_entry() {
        let mut schedule = WeekSchedule::new();
        let id = SlotId::new(Day::Wednesday, Period::Afternoon);
        schedule.slot_mut(id).entries.push(entry("E1", 60));

        let (found_slot, found) = schedule.find_entry("E1").unwrap();
        assert_eq!(found_slot, id);
        assert_eq!(found.duration_min, 60);
        assert!(schedule.find_entry("E99").is_none());
        assert!(schedule.contains_entry("E1"));
    }

    #[test]
    fn test_source_ids_span_grid() {
        let mut schedule = WeekSchedule::new();
        schedule
            .slot_mut(SlotId::new(Day::Monday, Period::Morning))
            .entries
            .push(entry("E1", 60));
        schedule
            .slot_mut(SlotId::new(Day::Friday, Period::Afternoon))
            .entries
            .push(entry("E2", 60));

        let mut ids = schedule.source_ids();
        ids.sort();
        assert_eq!(ids, vec!["E1", "E2"]);
        assert_eq!(schedule.entry_count(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut schedule = WeekSchedule::new();
        schedule
            .slot_mut(SlotId::new(Day::Tuesday, Period::Morning))
            .entries
            .push(entry("E1", 120));
        schedule.retime();

        let json = serde_json::to_string(&schedule).unwrap();
        let back: WeekSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
