//! Pipeline Repository
//!
//! Handles all database operations related to pipelines.

use hireline_core::domain::pipeline::Pipeline;
use hireline_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::step_repository;

/// Create a new pipeline in the database
pub async fn create(pool: &PgPool, req: CreatePipeline) -> Result<Pipeline, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO pipelines (id, name, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(&req.name)
    .bind(&req.description)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Pipeline {
        id,
        name: req.name,
        description: req.description,
        created_at: now,
        updated_at: now,
        steps: Vec::new(),
    })
}

/// Find a pipeline by ID, with its steps ordered and owners joined
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Pipeline>, sqlx::Error> {
    let row = sqlx::query_as::<_, PipelineRow>(
        r#"
        SELECT id, name, description, created_at, updated_at
        FROM pipelines
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let steps = step_repository::list_for_pipeline(pool, id).await?;

    Ok(Some(Pipeline {
        id: row.id,
        name: row.name,
        description: row.description,
        created_at: row.created_at,
        updated_at: row.updated_at,
        steps,
    }))
}

/// List all pipelines as summaries, newest first
pub async fn list_summaries(pool: &PgPool) -> Result<Vec<PipelineSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT p.id, p.name, p.description, p.created_at,
               COUNT(s.id) AS step_count
        FROM pipelines p
        LEFT JOIN pipeline_steps s ON s.pipeline_id = p.id
        GROUP BY p.id, p.name, p.description, p.created_at
        ORDER BY p.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Delete a pipeline by ID; steps cascade
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pipelines WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct PipelineRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    step_count: i64,
}

impl From<SummaryRow> for PipelineSummary {
    fn from(row: SummaryRow) -> Self {
        PipelineSummary {
            id: row.id,
            name: row.name,
            description: row.description,
            step_count: row.step_count,
            created_at: row.created_at,
        }
    }
}
