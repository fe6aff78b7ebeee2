//! Training requirement model.
//!
//! A `TrainingItem` is one mandatory training tied to a single role, as
//! stored in the training catalog. The allocator consumes lists of
//! these, already filtered to the roles selected for the week.

use serde::{Deserialize, Serialize};

/// How a training session is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// One sitting per role, never merged with other items.
    Individual,
    /// One shared sitting; items with the same name and instructor
    /// across different roles collapse into a single session.
    Group,
}

/// One mandatory training requirement for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingItem {
    /// Unique item identifier.
    pub id: String,
    /// Job role this requirement applies to.
    pub role: String,
    /// Training name.
    pub name: String,
    /// Session length in minutes. Positive.
    pub duration_min: i64,
    /// Responsible instructor.
    pub instructor: String,
    /// Delivery type.
    pub session_type: SessionType,
}

impl TrainingItem {
    /// Creates a new Individual training item.
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
        duration_min: i64,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            name: name.into(),
            duration_min,
            instructor: instructor.into(),
            session_type: SessionType::Individual,
        }
    }

    /// Sets the session type.
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    /// Marks this item as a shareable Group session.
    pub fn group(mut self) -> Self {
        self.session_type = SessionType::Group;
        self
    }
}
