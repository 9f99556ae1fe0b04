//! Pipeline Service
//!
//! Business logic for pipeline management.

use hireline_core::domain::pipeline::Pipeline;
use hireline_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::pipeline_repository;

/// Service error type
#[derive(Debug)]
pub enum PipelineError {
    NotFound(Uuid),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for PipelineError {
    fn from(err: sqlx::Error) -> Self {
        PipelineError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Create a new pipeline
pub async fn create_pipeline(pool: &PgPool, req: CreatePipeline) -> Result<Pipeline> {
    validate_pipeline_request(&req)?;

    let pipeline = pipeline_repository::create(pool, req).await?;

    tracing::info!("Pipeline created: {} ({})", pipeline.name, pipeline.id);

    Ok(pipeline)
}

/// Get a pipeline by ID
pub async fn get_pipeline(pool: &PgPool, id: Uuid) -> Result<Pipeline> {
    let pipeline = pipeline_repository::find_by_id(pool, id)
        .await?
        .ok_or(PipelineError::NotFound(id))?;

    Ok(pipeline)
}

/// List all pipelines
pub async fn list_pipelines(pool: &PgPool) -> Result<Vec<PipelineSummary>> {
    let pipelines = pipeline_repository::list_summaries(pool).await?;
    Ok(pipelines)
}

/// Delete a pipeline; its steps cascade
pub async fn delete_pipeline(pool: &PgPool, id: Uuid) -> Result<()> {
    let deleted = pipeline_repository::delete(pool, id).await?;

    if !deleted {
        return Err(PipelineError::NotFound(id));
    }

    tracing::info!("Pipeline deleted: {}", id);

    Ok(())
}

// =============================================================================
// Validation
// =============================================================================

fn validate_pipeline_request(req: &CreatePipeline) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(PipelineError::ValidationError(
            "Pipeline name cannot be empty".to_string(),
        ));
    }

    if req.name.len() > 255 {
        return Err(PipelineError::ValidationError(
            "Pipeline name is too long (max 255 characters)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_name() {
        let req = CreatePipeline {
            name: "".to_string(),
            description: None,
        };

        let result = validate_pipeline_request(&req);
        assert!(matches!(result, Err(PipelineError::ValidationError(_))));
    }

    #[test]
    fn test_validate_overlong_name() {
        let req = CreatePipeline {
            name: "x".repeat(256),
            description: None,
        };

        let result = validate_pipeline_request(&req);
        assert!(matches!(result, Err(PipelineError::ValidationError(_))));
    }

    #[test]
    fn test_validate_valid_request() {
        let req = CreatePipeline {
            name: "Engineering Hiring".to_string(),
            description: Some("Standard engineering funnel".to_string()),
        };

        assert!(validate_pipeline_request(&req).is_ok());
    }
}
