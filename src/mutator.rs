//! Interactive schedule mutation.
//!
//! Re-expresses drag-and-drop rearrangement as explicit commands over
//! an existing [`WeekSchedule`]: move an entry between slots, or delete
//! it. Both operate in place and report a [`MutationStatus`] so a stale
//! entry ID degrades to a recoverable no-op, never a fault.

use crate::models::{ScheduleEntry, SlotId, WeekSchedule};

/// Outcome of a move or delete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    /// The schedule was changed.
    Applied,
    /// Source and destination are the same slot; nothing to do.
    Unchanged,
    /// The entry ID was not present in the named slot. The caller
    /// should re-read current state.
    NotFound,
}

impl MutationStatus {
    /// Whether the schedule was actually modified.
    pub fn changed(self) -> bool {
        self == MutationStatus::Applied
    }
}

/// Moves an entry from one slot to another.
///
/// The entry is removed from `from` and appended to the end of `to`,
/// then both slots are retimed. A move with `from == to` is reported
/// [`MutationStatus::Unchanged`].
///
/// Destination capacity is deliberately **not** validated: manual
/// rearrangement may overfill a slot past 240 minutes. The
/// generation-time capacity invariant only holds until the first manual
/// move.
pub fn move_entry(
    schedule: &mut WeekSchedule,
    entry_id: &str,
    from: SlotId,
    to: SlotId,
) -> MutationStatus {
    if from == to {
        return MutationStatus::Unchanged;
    }

    let Some(entry) = take_entry(schedule, entry_id, from) else {
        return MutationStatus::NotFound;
    };

    schedule.slot_mut(to).entries.push(entry);
    schedule.slot_mut(from).retime();
    schedule.slot_mut(to).retime();
    MutationStatus::Applied
}

/// Deletes an entry from the given slot.
///
/// Confirmation is the caller's concern; this is safe to call
/// unconditionally once confirmed. A stale ID is reported
/// [`MutationStatus::NotFound`].
pub fn delete_entry(schedule: &mut WeekSchedule, entry_id: &str, slot: SlotId) -> MutationStatus {
    if take_entry(schedule, entry_id, slot).is_none() {
        return MutationStatus::NotFound;
    }
    schedule.slot_mut(slot).retime();
    MutationStatus::Applied
}

/// Removes and returns the entry with the given ID from a slot.
fn take_entry(schedule: &mut WeekSchedule, entry_id: &str, slot: SlotId) -> Option<ScheduleEntry> {
    let entries = &mut schedule.slot_mut(slot).entries;
    let index = entries.iter().position(|e| e.id == entry_id)?;
    Some(entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, ScheduleEntry};

    fn entry(id: &str, duration_min: i64) -> ScheduleEntry {
        ScheduleEntry::individual(id, "Driver", "Training", duration_min, "Ana")
    }

    fn sample_schedule() -> WeekSchedule {
        let mut schedule = WeekSchedule::new();
        let monday = SlotId::new(Day::Monday, Period::Morning);
        let wednesday = SlotId::new(Day::Wednesday, Period::Afternoon);
        schedule.slot_mut(monday).entries.push(entry("E1", 120));
        schedule.slot_mut(monday).entries.push(entry("E2", 60));
        schedule.slot_mut(wednesday).entries.push(entry("E3", 90));
        schedule.retime();
        schedule
    }

    #[test]
    fn test_move_preserves_entry_count() {
        let mut schedule = sample_schedule();
        let from = SlotId::new(Day::Monday, Period::Morning);
        let to = SlotId::new(Day::Friday, Period::Afternoon);

        let status = move_entry(&mut schedule, "E1", from, to);
        assert_eq!(status, MutationStatus::Applied);
        assert!(status.changed());
        assert_eq!(schedule.entry_count(), 3);
        assert_eq!(schedule.find_entry("E1").unwrap().0, to);
    }

    #[test]
    fn test_move_retimes_both_slots() {
        let mut schedule = sample_schedule();
        let from = SlotId::new(Day::Monday, Period::Morning);
        let to = SlotId::new(Day::Monday, Period::Afternoon);

        move_entry(&mut schedule, "E1", from, to);

        // E2 shifts up to the Morning start; E1 restarts at 13:00.
        let remaining = &schedule.slot(from).entries[0];
        assert_eq!(remaining.id, "E2");
        assert_eq!(remaining.start_min, Some(420));
        let moved = &schedule.slot(to).entries[0];
        assert_eq!(moved.start_min, Some(780));
        assert_eq!(moved.end_min, Some(900));
    }

    #[test]
    fn test_move_same_slot_is_noop() {
        let mut schedule = sample_schedule();
        let slot = SlotId::new(Day::Monday, Period::Morning);
        let before = schedule.clone();

        let status = move_entry(&mut schedule, "E1", slot, slot);
        assert_eq!(status, MutationStatus::Unchanged);
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_move_not_found() {
        let mut schedule = sample_schedule();
        let before = schedule.clone();
        let from = SlotId::new(Day::Monday, Period::Morning);
        let to = SlotId::new(Day::Tuesday, Period::Morning);

        // E3 lives in Wednesday-Afternoon, not Monday-Morning.
        let status = move_entry(&mut schedule, "E3", from, to);
        assert_eq!(status, MutationStatus::NotFound);
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_move_may_exceed_capacity() {
        let mut schedule = sample_schedule();
        let wednesday = SlotId::new(Day::Wednesday, Period::Afternoon);
        let monday = SlotId::new(Day::Monday, Period::Morning);

        // Monday-Morning already holds 180 min; adding 90 overfills it.
        let status = move_entry(&mut schedule, "E3", wednesday, monday);
        assert_eq!(status, MutationStatus::Applied);
        assert_eq!(schedule.slot(monday).used_min(), 270);
        assert!(schedule.slot(monday).remaining_min() < 0);
    }

    #[test]
    fn test_move_inverse_restores_schedule() {
        let mut schedule = sample_schedule();
        let original = schedule.clone();
        let from = SlotId::new(Day::Wednesday, Period::Afternoon);
        let to = SlotId::new(Day::Thursday, Period::Morning);

        move_entry(&mut schedule, "E3", from, to);
        move_entry(&mut schedule, "E3", to, from);

        // E3 was alone in its slot, so order is preserved exactly.
        assert_eq!(schedule, original);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        // Scenario E: delete from Wednesday-Afternoon only.
        let mut schedule = sample_schedule();
        let wednesday = SlotId::new(Day::Wednesday, Period::Afternoon);

        let status = delete_entry(&mut schedule, "E3", wednesday);
        assert_eq!(status, MutationStatus::Applied);
        assert_eq!(schedule.entry_count(), 2);
        assert!(!schedule.contains_entry("E3"));

        // Other slots untouched.
        let monday = SlotId::new(Day::Monday, Period::Morning);
        assert_eq!(schedule.slot(monday).entries.len(), 2);
    }

    #[test]
    fn test_delete_not_found() {
        let mut schedule = sample_schedule();
        let before = schedule.clone();
        let slot = SlotId::new(Day::Monday, Period::Morning);

        let status = delete_entry(&mut schedule, "E99", slot);
        assert_eq!(status, MutationStatus::NotFound);
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_delete_retimes_remaining() {
        let mut schedule = sample_schedule();
        let monday = SlotId::new(Day::Monday, Period::Morning);

        delete_entry(&mut schedule, "E1", monday);

        // E2 moves up to the slot start.
        assert_eq!(schedule.slot(monday).entries[0].start_min, Some(420));
    }
}
