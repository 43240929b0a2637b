// Change notifications emitted by the store

use serde::{Deserialize, Serialize};

use crate::models::{Project, Task};

/// A change notification broadcast after every successful mutation.
///
/// Events carry a snapshot of the entity as it was at the moment of the
/// mutation; deletions carry only identifiers since the entity is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StoreEvent {
    ProjectCreated { project: Project },
    ProjectUpdated { project: Project },
    /// `cascaded_tasks` is the number of tasks removed along with the project.
    ProjectDeleted { id: String, cascaded_tasks: usize },
    TaskCreated { task: Task },
    TaskUpdated { task: Task },
    TaskDeleted { id: String },
}

impl StoreEvent {
    /// Identifier of the entity this event concerns.
    pub fn entity_id(&self) -> &str {
        match self {
            StoreEvent::ProjectCreated { project } | StoreEvent::ProjectUpdated { project } => {
                &project.id
            }
            StoreEvent::ProjectDeleted { id, .. } => id,
            StoreEvent::TaskCreated { task } | StoreEvent::TaskUpdated { task } => &task.id,
            StoreEvent::TaskDeleted { id } => id,
        }
    }
}
