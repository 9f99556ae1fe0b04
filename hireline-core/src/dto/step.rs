//! Pipeline step DTOs

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Request to create a pipeline step at an explicit order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStep {
    pub pipeline_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub step_order: i32,
    pub duration_days: Option<i32>,
    pub task_owner_id: Option<Uuid>,
}

/// Partial update of a pipeline step
///
/// Outer `None` leaves a field untouched; `Some(None)` on the nullable fields
/// clears them. On the wire an absent key is "untouched" and an explicit
/// `null` is "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_order: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub duration_days: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub task_owner_id: Option<Option<Uuid>>,
}

impl UpdateStep {
    /// Patch that moves a step to `order` and touches nothing else.
    pub fn with_order(order: i32) -> Self {
        UpdateStep {
            step_order: Some(order),
            ..UpdateStep::default()
        }
    }
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
