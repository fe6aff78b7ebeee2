//! Weekly onboarding-training planner engine.
//!
//! Users pick roles, the catalog yields the mandatory trainings tied to
//! those roles, and the engine packs them into a five-day, two-period
//! calendar of 240-minute slots. Shared Group sessions merge across
//! roles; move/delete commands keep a generated schedule consistent
//! under manual rearrangement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TrainingItem`, `ScheduleEntry`,
//!   `Slot`, `SlotId`, `WeekSchedule`
//! - **`allocator`**: Grouping, ordering, and first-fit placement
//!   (plus the instructor-affinity variant), with unplaced reporting
//! - **`mutator`**: `move_entry` / `delete_entry` commands with
//!   structured no-op statuses
//! - **`palette`**: Deterministic pastel color per instructor, with a
//!   user-override channel
//! - **`catalog`**: Role-filtered access to training definitions
//! - **`snapshot`**: Persisted layout, JSON codec, load/save contract
//! - **`session`**: `PlannerSession` facade tying it all together
//! - **`validation`**: Input integrity checks on catalog items
//!
//! # Architecture
//!
//! The engine is pure and single-threaded: allocation and mutation are
//! synchronous transformations over values owned by one session.
//! Rendering, credential checks, catalog CRUD, printing, and the
//! physical key-value store are external collaborators.

pub mod allocator;
pub mod catalog;
pub mod models;
pub mod mutator;
pub mod palette;
pub mod session;
pub mod snapshot;
pub mod validation;
