//! Weekly grid cells: days, periods, and slots.
//!
//! The planning horizon is a fixed five-day work week with two periods
//! per day. Each (day, period) pair is one `Slot` holding a stack of
//! placed entries.
//!
//! # Time Model
//! All times are in minutes. Clock times are minutes since midnight:
//! Morning starts at 07:00 (420), Afternoon at 13:00 (780). Every slot
//! has the same nominal capacity of 240 minutes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScheduleEntry;

/// Nominal capacity of a single slot (minutes).
pub const SLOT_CAPACITY_MIN: i64 = 240;

/// Combined capacity of one day, Morning + Afternoon (minutes).
pub const DAY_CAPACITY_MIN: i64 = 2 * SLOT_CAPACITY_MIN;

/// A work day of the planning week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// Half-day period of a work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    /// Both periods in day order.
    pub const ALL: [Period; 2] = [Period::Morning, Period::Afternoon];

    /// Nominal start of this period (minutes since midnight).
    ///
    /// Morning sessions start at 07:00, Afternoon at 13:00.
    #[inline]
    pub fn start_min(self) -> i64 {
        match self {
            Period::Morning => 7 * 60,
            Period::Afternoon => 13 * 60,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
        };
        f.write_str(name)
    }
}

/// Identifier of one grid cell: a (day, period) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub day: Day,
    pub period: Period,
}

impl SlotId {
    /// Creates a slot identifier.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// All ten slot identifiers in placement traversal order:
    /// Monday-Morning, Monday-Afternoon, Tuesday-Morning, ...
    /// Friday-Afternoon.
    pub fn week_order() -> impl Iterator<Item = SlotId> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Period::ALL.into_iter().map(move |period| SlotId { day, period }))
    }

    /// Position of this slot in the traversal order (0..10).
    #[inline]
    pub fn index(self) -> usize {
        let d = self.day as usize;
        let p = self.period as usize;
        d * 2 + p
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.period)
    }
}

/// One grid cell: fixed-capacity container of placed entries.
///
/// Entry order is insertion order and doubles as the visual stacking
/// order; start times within the slot are derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Which cell of the grid this is.
    pub id: SlotId,
    /// Placed entries, in stacking order.
    pub entries: Vec<ScheduleEntry>,
}

impl Slot {
    /// Creates an empty slot.
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            entries: Vec::new(),
        }
    }

    /// Sum of entry durations currently seated here (minutes).
    pub fn used_min(&self) -> i64 {
        self.entries.iter().map(|e| e.duration_min).sum()
    }

    /// Capacity not yet consumed (minutes).
    ///
    /// May be negative after a manual move, which is allowed to
    /// overfill a slot.
    pub fn remaining_min(&self) -> i64 {
        SLOT_CAPACITY_MIN - self.used_min()
    }

    /// Whether an entry of the given duration fits without exceeding
    /// the 240-minute capacity.
    #[inline]
    pub fn fits(&self, duration_min: i64) -> bool {
        duration_min <= self.remaining_min()
    }

    /// Recomputes start/end times of every entry in this slot.
    ///
    /// Each entry starts at the period's nominal start plus the sum of
    /// the durations seated before it.
    pub fn retime(&mut self) {
        let mut cursor = self.id.period.start_min();
        for entry in &mut self.entries {
            entry.start_min = Some(cursor);
            entry.end_min = Some(cursor + entry.duration_min);
            cursor += entry.duration_min;
        }
    }

    /// Number of entries seated here.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Formats minutes-since-midnight as `HH:MM`.
pub fn format_clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
