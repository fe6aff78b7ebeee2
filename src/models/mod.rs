//! Planner domain models.
//!
//! Core data types for the weekly onboarding planner: training
//! requirements coming from the catalog, the entries derived from them,
//! and the fixed 5-day × 2-period grid they are seated into.
//!
//! # Domain Mappings
//!
//! | weekplan | Catalog | Grid |
//! |----------|---------|------|
//! | TrainingItem | one role's requirement | — |
//! | ScheduleEntry | one or more merged requirements | placed unit |
//! | Slot | — | one (day, period) cell, 240 min |
//! | WeekSchedule | — | complete 5×2 grid |

mod entry;
mod schedule;
mod slot;
mod training;

pub use entry::ScheduleEntry;
pub use schedule::WeekSchedule;
pub use slot::{format_clock, Day, Period, Slot, SlotId, DAY_CAPACITY_MIN, SLOT_CAPACITY_MIN};
pub use training::{SessionType, TrainingItem};
