//! Step API Handlers
//!
//! HTTP endpoints for pipeline step mutations.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::dto::step::{CreateStep, UpdateStep};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::service::step_service;

/// POST /step/create
/// Create a step at the explicit order carried in the request
pub async fn create_step(
    State(pool): State<PgPool>,
    Json(req): Json<CreateStep>,
) -> ApiResult<Json<PipelineStep>> {
    tracing::info!(
        "Creating step '{}' at order {} (pipeline {})",
        req.name,
        req.step_order,
        req.pipeline_id
    );

    let step = step_service::create_step(&pool, req).await?;

    Ok(Json(step))
}

/// PATCH /step/{id}
/// Apply a partial update to a step
pub async fn update_step(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStep>,
) -> ApiResult<Json<PipelineStep>> {
    tracing::debug!("Updating step: {}", id);

    let step = step_service::update_step(&pool, id, req).await?;

    Ok(Json(step))
}

/// DELETE /step/{id}
/// Delete a step; the surviving steps are re-indexed to a dense sequence
pub async fn delete_step(State(pool): State<PgPool>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    tracing::info!("Deleting step: {}", id);

    step_service::delete_step(&pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
