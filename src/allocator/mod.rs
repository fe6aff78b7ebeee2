//! Greedy weekly allocator.
//!
//! Turns a filtered list of training items into a populated weekly
//! grid in three passes:
//!
//! 1. **Grouping** — Group items sharing a name and instructor collapse
//!    into one entry serving the union of their roles; Individual items
//!    map one-to-one.
//! 2. **Ordering** — Group entries before Individual entries, then
//!    descending duration. Seating the biggest shared blocks first
//!    limits fragmentation.
//! 3. **Placement** — first-fit over the fixed Monday-Morning →
//!    Friday-Afternoon traversal, single pass, no backtracking, no
//!    splitting across slots. The optional instructor-affinity policy
//!    first tries to keep one instructor's sessions within a single
//!    day.
//!
//! Entries that fit nowhere (oversized, or the week is full) are
//! reported in [`Allocation::unplaced`] rather than dropped.
//!
//! # Complexity
//! O(n²) grouping plus O(n · s) placement with s = 10 slots; n is a
//! week's worth of trainings, so quadratic grouping is fine.

use std::collections::HashMap;

use crate::models::{
    Day, Period, ScheduleEntry, SessionType, SlotId, TrainingItem, WeekSchedule, DAY_CAPACITY_MIN,
};

/// Placement policy for the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// Plain first-fit over the week traversal.
    #[default]
    FirstFit,
    /// Try to seat each instructor's entries within a single day
    /// (Morning + Afternoon, 480 min combined) before falling back to
    /// per-entry first-fit across the week.
    InstructorAffinity,
}

/// Result of an allocator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// The populated weekly grid.
    pub schedule: WeekSchedule,
    /// Entries that could not be seated anywhere. Oversized entries
    /// (> 240 min) always land here; no splitting is attempted.
    pub unplaced: Vec<ScheduleEntry>,
}

impl Allocation {
    /// Whether every entry was seated.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Greedy schedule allocator.
///
/// Deterministic: the same input list and policy always produce the
/// same grid. Ordering uses stable sorts and placement has no random
/// component.
///
/// # Example
///
/// ```
/// use weekplan::allocator::Allocator;
/// use weekplan::models::TrainingItem;
///
/// let items = vec![TrainingItem::new("T1", "Driver", "Safety", 120, "Ana")];
/// let allocation = Allocator::new().allocate(&items).unwrap();
/// assert!(allocation.is_complete());
/// assert_eq!(allocation.schedule.entry_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    policy: PlacementPolicy,
}

impl Allocator {
    /// Creates a first-fit allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement policy.
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Allocates the given items into a weekly grid.
    ///
    /// Items are expected to be pre-filtered to the selected roles.
    /// Returns `None` for empty input: an empty selection is the valid
    /// "no schedule" state, not an error.
    pub fn allocate(&self, items: &[TrainingItem]) -> Option<Allocation> {
        if items.is_empty() {
            return None;
        }

        let mut entries = build_entries(items);
        sort_for_placement(&mut entries);

        let mut schedule = WeekSchedule::new();
        let mut unplaced = Vec::new();

        match self.policy {
            PlacementPolicy::FirstFit => {
                for entry in entries {
                    if let Err(entry) = place_first_fit(&mut schedule, entry) {
                        unplaced.push(entry);
                    }
                }
            }
            PlacementPolicy::InstructorAffinity => {
                place_with_affinity(&mut schedule, entries, &mut unplaced);
            }
        }

        schedule.retime();
        Some(Allocation { schedule, unplaced })
    }
}

/// Grouping pass: collapses Group items sharing (name, instructor)
/// into one entry; Individual items never merge.
fn build_entries(items: &[TrainingItem]) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = Vec::new();
    for item in items {
        if item.session_type == SessionType::Group {
            let existing = entries.iter_mut().find(|e| {
                e.session_type == SessionType::Group
                    && e.name == item.name
                    && e.instructor == item.instructor
            });
            if let Some(entry) = existing {
                entry.absorb(item);
                continue;
            }
        }
        entries.push(ScheduleEntry::from_item(item));
    }
    entries
}

/// Ordering pass: Group entries first, then descending duration.
/// Stable, so equal entries keep their input order.
fn sort_for_placement(entries: &mut [ScheduleEntry]) {
    entries.sort_by(|a, b| {
        let rank = |e: &ScheduleEntry| match e.session_type {
            SessionType::Group => 0,
            SessionType::Individual => 1,
        };
        rank(a)
            .cmp(&rank(b))
            .then(b.duration_min.cmp(&a.duration_min))
    });
}

/// Seats one entry into the first slot with room, or hands it back.
fn place_first_fit(
    schedule: &mut WeekSchedule,
    entry: ScheduleEntry,
) -> Result<(), ScheduleEntry> {
    for id in SlotId::week_order() {
        let slot = schedule.slot_mut(id);
        if slot.fits(entry.duration_min) {
            slot.entries.push(entry);
            return Ok(());
        }
    }
    Err(entry)
}

/// Instructor-affinity placement: whole-instructor single-day seating
/// where possible, per-entry first-fit otherwise.
fn place_with_affinity(
    schedule: &mut WeekSchedule,
    entries: Vec<ScheduleEntry>,
    unplaced: &mut Vec<ScheduleEntry>,
) {
    // Bundle by instructor, keeping the sorted order both across
    // bundles (first appearance) and within each bundle.
    let mut order: Vec<String> = Vec::new();
    let mut bundles: HashMap<String, Vec<ScheduleEntry>> = HashMap::new();
    for entry in entries {
        if !bundles.contains_key(&entry.instructor) {
            order.push(entry.instructor.clone());
        }
        bundles
            .entry(entry.instructor.clone())
            .or_default()
            .push(entry);
    }

    for instructor in order {
        let Some(bundle) = bundles.remove(&instructor) else {
            continue;
        };
        let total: i64 = bundle.iter().map(|e| e.duration_min).sum();

        if total <= DAY_CAPACITY_MIN {
            if let Some(day) = find_day_for_bundle(schedule, &bundle) {
                seat_bundle_in_day(schedule, day, bundle);
                continue;
            }
        }

        // Fall back to week-wide first-fit for this instructor.
        for entry in bundle {
            if let Err(entry) = place_first_fit(schedule, entry) {
                unplaced.push(entry);
            }
        }
    }
}

/// Finds the first day whose two periods can absorb the whole bundle,
/// seating Morning-first within the day. Pure simulation; commits
/// nothing.
fn find_day_for_bundle(schedule: &WeekSchedule, bundle: &[ScheduleEntry]) -> Option<Day> {
    Day::ALL.into_iter().find(|&day| {
        let mut morning = schedule.slot(SlotId::new(day, Period::Morning)).remaining_min();
        let mut afternoon = schedule
            .slot(SlotId::new(day, Period::Afternoon))
            .remaining_min();
        bundle.iter().all(|entry| {
            if entry.duration_min <= morning {
                morning -= entry.duration_min;
                true
            } else if entry.duration_min <= afternoon {
                afternoon -= entry.duration_min;
                true
            } else {
                false
            }
        })
    })
}

/// Commits a bundle into one day, Morning-first. Only called after
/// `find_day_for_bundle` proved the day fits.
fn seat_bundle_in_day(schedule: &mut WeekSchedule, day: Day, bundle: Vec<ScheduleEntry>) {
    for entry in bundle {
        let morning = SlotId::new(day, Period::Morning);
        let target = if schedule.slot(morning).fits(entry.duration_min) {
            morning
        } else {
            SlotId::new(day, Period::Afternoon)
        };
        schedule.slot_mut(target).entries.push(entry);
    }
}
