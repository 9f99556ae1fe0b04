//! Pipeline domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hiring pipeline
///
/// Structure shared between the server (persists) and the editor (renders and
/// mutates). A pipeline owns its steps; deleting a pipeline cascades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Steps sorted ascending by `step_order`
    pub steps: Vec<PipelineStep>,
}

/// Single step of a hiring pipeline
///
/// `step_order` is 1-based and dense within a pipeline: after any successful
/// write the orders of a pipeline's N steps are exactly 1..=N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub id: Uuid,
    pub pipeline_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub step_order: i32,
    pub duration_days: Option<i32>,
    pub task_owner_id: Option<Uuid>,
    /// Owner display record, denormalized from the member roster
    pub task_owner: Option<TaskOwner>,
}

/// Display record for a step's assigned owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOwner {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TaskOwner {
    /// Best available label: name, falling back to email.
    pub fn display_label(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}
