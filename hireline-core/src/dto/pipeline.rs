//! Pipeline DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipeline {
    pub name: String,
    pub description: Option<String>,
}

/// Pipeline list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub step_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
