//! Planning session: the engine facade.
//!
//! A `PlannerSession` owns one logical session's state — selected
//! roles, the generated grid, the unplaced list, and the instructor
//! palette — and wires the allocator, mutator, and snapshot layers
//! together. Every operation is synchronous and runs on the caller's
//! thread; external snapshot changes are handled by reloading and
//! replacing state wholesale, never by merging.

use tracing::{debug, info};

use crate::allocator::Allocator;
use crate::catalog::TrainingCatalog;
use crate::models::{ScheduleEntry, SlotId, WeekSchedule};
use crate::mutator::{self, MutationStatus};
use crate::palette::InstructorPalette;
use crate::snapshot::{Snapshot, SnapshotError, SnapshotStore};

/// One planning session over a training catalog.
pub struct PlannerSession<C> {
    catalog: C,
    allocator: Allocator,
    selected_roles: Vec<String>,
    schedule: Option<WeekSchedule>,
    unplaced: Vec<ScheduleEntry>,
    palette: InstructorPalette,
}

impl<C: TrainingCatalog> PlannerSession<C> {
    /// Creates a session with no selection and no schedule.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            allocator: Allocator::new(),
            selected_roles: Vec::new(),
            schedule: None,
            unplaced: Vec::new(),
            palette: InstructorPalette::new(),
        }
    }

    /// Replaces the allocator (e.g. to switch placement policy).
    pub fn with_allocator(mut self, allocator: Allocator) -> Self {
        self.allocator = allocator;
        self
    }

    /// Changes the role selection and regenerates the schedule.
    ///
    /// The previous grid is replaced wholesale. An empty filtered list
    /// clears the schedule to the "no schedule" state. Manual moves and
    /// deletes made on the previous grid are discarded.
    pub fn select_roles(&mut self, roles: Vec<String>) {
        self.selected_roles = roles;
        let items = self.catalog.list_by_roles(&self.selected_roles);

        match self.allocator.allocate(&items) {
            Some(allocation) => {
                info!(
                    placed = allocation.schedule.entry_count(),
                    unplaced = allocation.unplaced.len(),
                    "regenerated weekly schedule"
                );
                self.schedule = Some(allocation.schedule);
                self.unplaced = allocation.unplaced;
            }
            None => {
                debug!("selection yields no trainings; clearing schedule");
                self.schedule = None;
                self.unplaced.clear();
            }
        }
    }

    /// Explicitly resets to the "no schedule" state.
    pub fn clear(&mut self) {
        self.selected_roles.clear();
        self.schedule = None;
        self.unplaced.clear();
    }

    /// Currently selected roles.
    pub fn selected_roles(&self) -> &[String] {
        &self.selected_roles
    }

    /// The current grid, if one is generated.
    pub fn schedule(&self) -> Option<&WeekSchedule> {
        self.schedule.as_ref()
    }

    /// Entries the last allocator run could not seat.
    pub fn unplaced(&self) -> &[ScheduleEntry] {
        &self.unplaced
    }

    /// Moves an entry between slots. Reports
    /// [`MutationStatus::NotFound`] when no schedule exists.
    pub fn move_entry(&mut self, entry_id: &str, from: SlotId, to: SlotId) -> MutationStatus {
        match self.schedule.as_mut() {
            Some(schedule) => mutator::move_entry(schedule, entry_id, from, to),
            None => MutationStatus::NotFound,
        }
    }

    /// Deletes an entry from a slot. Confirmation happens before this
    /// call; reports [`MutationStatus::NotFound`] for stale targets.
    pub fn delete_entry(&mut self, entry_id: &str, slot: SlotId) -> MutationStatus {
        match self.schedule.as_mut() {
            Some(schedule) => mutator::delete_entry(schedule, entry_id, slot),
            None => MutationStatus::NotFound,
        }
    }

    /// Color for an instructor, assigning a stable pastel on first use.
    pub fn color_for(&mut self, instructor: &str) -> &str {
        self.palette.color_for(instructor)
    }

    /// User override for an instructor color.
    pub fn set_color(&mut self, instructor: impl Into<String>, color: impl Into<String>) {
        self.palette.set_color(instructor, color);
    }

    /// The instructor color table.
    pub fn palette(&self) -> &InstructorPalette {
        &self.palette
    }

    /// Captures the current state for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selected_roles: self.selected_roles.clone(),
            schedule: self.schedule.clone(),
            colors: self.palette.clone(),
        }
    }

    /// Replaces in-memory state with a snapshot, atomically.
    ///
    /// Used both for session restore and for external-change
    /// notifications (another session saved the snapshot). The unplaced
    /// list is not persisted, so it resets to empty.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.selected_roles = snapshot.selected_roles;
        self.schedule = snapshot.schedule;
        self.palette = snapshot.colors;
        self.unplaced.clear();
    }

    /// Saves the current state into a store under `key`.
    pub fn persist(
        &self,
        store: &mut impl SnapshotStore,
        key: &str,
    ) -> Result<(), SnapshotError> {
        store.save(key, self.snapshot().to_json()?);
        Ok(())
    }

    /// Loads state from a store, replacing local state in full.
    ///
    /// A missing or malformed payload falls back to the cleared "no
    /// schedule" state; the decode failure is logged, never raised.
    pub fn hydrate(&mut self, store: &impl SnapshotStore, key: &str) {
        let snapshot = store
            .load(key)
            .and_then(|payload| Snapshot::from_json_lossy(&payload))
            .unwrap_or_default();
        self.restore(snapshot);
    }
}
