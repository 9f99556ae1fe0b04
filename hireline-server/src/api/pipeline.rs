//! Pipeline API Handlers
//!
//! HTTP endpoints for pipeline management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use hireline_core::domain::pipeline::Pipeline;
use hireline_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::service::pipeline_service;

/// POST /pipeline/create
/// Create a new pipeline
pub async fn create_pipeline(
    State(pool): State<PgPool>,
    Json(req): Json<CreatePipeline>,
) -> ApiResult<Json<Pipeline>> {
    tracing::info!("Creating pipeline: {}", req.name);

    let pipeline = pipeline_service::create_pipeline(&pool, req).await?;

    Ok(Json(pipeline))
}

/// GET /pipeline/list
/// List all pipelines
pub async fn list_pipelines(State(pool): State<PgPool>) -> ApiResult<Json<Vec<PipelineSummary>>> {
    tracing::debug!("Listing all pipelines");

    let pipelines = pipeline_service::list_pipelines(&pool).await?;

    Ok(Json(pipelines))
}

/// GET /pipeline/{id}
/// Get pipeline by ID, steps ordered and owners resolved
pub async fn get_pipeline(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Pipeline>> {
    tracing::debug!("Getting pipeline: {}", id);

    let pipeline = pipeline_service::get_pipeline(&pool, id).await?;

    Ok(Json(pipeline))
}

/// DELETE /pipeline/{id}
/// Delete a pipeline and its steps
pub async fn delete_pipeline(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    tracing::info!("Deleting pipeline: {}", id);

    pipeline_service::delete_pipeline(&pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
