//! Step Service
//!
//! Business logic for pipeline step mutations. Creation trusts the explicit
//! order computed by the client's editor; deletion closes the order gap
//! server-side so the dense 1..=N invariant holds for every reader.

use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::dto::step::{CreateStep, UpdateStep};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{pipeline_repository, step_repository};

/// Service error type
#[derive(Debug)]
pub enum StepError {
    NotFound(Uuid),
    PipelineNotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for StepError {
    fn from(err: sqlx::Error) -> Self {
        StepError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, StepError>;

/// Create a new step
pub async fn create_step(pool: &PgPool, req: CreateStep) -> Result<PipelineStep> {
    validate_create(&req)?;

    // The pipeline must exist; rely on it rather than the FK error text
    pipeline_repository::find_by_id(pool, req.pipeline_id)
        .await?
        .ok_or(StepError::PipelineNotFound(req.pipeline_id))?;

    let step = step_repository::create(pool, req).await?;

    tracing::info!(
        "Step created: {} at order {} (pipeline {})",
        step.name,
        step.step_order,
        step.pipeline_id
    );

    Ok(step)
}

/// Apply a partial update to a step
pub async fn update_step(pool: &PgPool, id: Uuid, req: UpdateStep) -> Result<PipelineStep> {
    validate_update(&req)?;

    let step = step_repository::update(pool, id, req)
        .await?
        .ok_or(StepError::NotFound(id))?;

    Ok(step)
}

/// Delete a step and re-index the survivors
pub async fn delete_step(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = step_repository::delete_and_reindex(pool, id).await?;

    if !deleted {
        return Err(StepError::NotFound(id));
    }

    tracing::info!("Step deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_create(req: &CreateStep) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(StepError::ValidationError(
            "Step name cannot be empty".to_string(),
        ));
    }

    if req.step_order < 1 {
        return Err(StepError::ValidationError(
            "Step order must be positive".to_string(),
        ));
    }

    if let Some(days) = req.duration_days {
        if days < 0 {
            return Err(StepError::ValidationError(
                "Duration must be non-negative".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_update(req: &UpdateStep) -> Result<()> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(StepError::ValidationError(
                "Step name cannot be empty".to_string(),
            ));
        }
    }

    if let Some(order) = req.step_order {
        if order < 1 {
            return Err(StepError::ValidationError(
                "Step order must be positive".to_string(),
            ));
        }
    }

    if let Some(Some(days)) = req.duration_days {
        if days < 0 {
            return Err(StepError::ValidationError(
                "Duration must be non-negative".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str, order: i32) -> CreateStep {
        CreateStep {
            pipeline_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            step_order: order,
            duration_days: None,
            task_owner_id: None,
        }
    }

    #[test]
    fn test_validate_create_empty_name() {
        let result = validate_create(&create_req("  ", 1));
        assert!(matches!(result, Err(StepError::ValidationError(_))));
    }

    #[test]
    fn test_validate_create_non_positive_order() {
        let result = validate_create(&create_req("Phone Screen", 0));
        assert!(matches!(result, Err(StepError::ValidationError(_))));
    }

    #[test]
    fn test_validate_create_negative_duration() {
        let mut req = create_req("Phone Screen", 1);
        req.duration_days = Some(-1);

        let result = validate_create(&req);
        assert!(matches!(result, Err(StepError::ValidationError(_))));
    }

    #[test]
    fn test_validate_create_valid_request() {
        let mut req = create_req("Phone Screen", 2);
        req.duration_days = Some(3);

        assert!(validate_create(&req).is_ok());
    }

    #[test]
    fn test_validate_update_clearing_fields_is_valid() {
        let req = UpdateStep {
            description: Some(None),
            duration_days: Some(None),
            task_owner_id: Some(None),
            ..UpdateStep::default()
        };

        assert!(validate_update(&req).is_ok());
    }

    #[test]
    fn test_validate_update_empty_name() {
        let req = UpdateStep {
            name: Some("".to_string()),
            ..UpdateStep::default()
        };

        let result = validate_update(&req);
        assert!(matches!(result, Err(StepError::ValidationError(_))));
    }
}
