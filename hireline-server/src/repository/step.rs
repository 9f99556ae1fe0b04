//! Step Repository
//!
//! Handles all database operations related to pipeline steps. Owner display
//! records are joined from the member roster on every read.

use hireline_core::domain::pipeline::{PipelineStep, TaskOwner};
use hireline_core::dto::step::{CreateStep, UpdateStep};
use sqlx::PgPool;
use uuid::Uuid;

const STEP_SELECT: &str = r#"
    SELECT s.id, s.pipeline_id, s.name, s.description, s.step_order,
           s.duration_days, s.task_owner_id,
           m.name AS owner_name, m.email AS owner_email
    FROM pipeline_steps s
    LEFT JOIN org_members m ON m.id = s.task_owner_id
"#;

/// List a pipeline's steps, ordered ascending.
pub async fn list_for_pipeline(
    pool: &PgPool,
    pipeline_id: Uuid,
) -> Result<Vec<PipelineStep>, sqlx::Error> {
    let query = format!("{STEP_SELECT} WHERE s.pipeline_id = $1 ORDER BY s.step_order");
    let rows = sqlx::query_as::<_, StepRow>(&query)
        .bind(pipeline_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Find a step by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PipelineStep>, sqlx::Error> {
    let query = format!("{STEP_SELECT} WHERE s.id = $1");
    let row = sqlx::query_as::<_, StepRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.into()))
}

/// Create a new step at the explicit order carried in the request
pub async fn create(pool: &PgPool, req: CreateStep) -> Result<PipelineStep, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO pipeline_steps (
            id, pipeline_id, name, description, step_order, duration_days, task_owner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(req.pipeline_id)
    .bind(&req.name)
    .bind(&req.description)
    .bind(req.step_order)
    .bind(req.duration_days)
    .bind(req.task_owner_id)
    .execute(pool)
    .await?;

    // Re-read through the owner join for the canonical record
    find_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Apply a partial update to a step
///
/// Absent patch fields keep their stored values; explicit nulls clear the
/// nullable fields. Returns the canonical record, or None if the step does
/// not exist.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    req: UpdateStep,
) -> Result<Option<PipelineStep>, sqlx::Error> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let name = req.name.unwrap_or(existing.name);
    let description = req.description.unwrap_or(existing.description);
    let step_order = req.step_order.unwrap_or(existing.step_order);
    let duration_days = req.duration_days.unwrap_or(existing.duration_days);
    let task_owner_id = req.task_owner_id.unwrap_or(existing.task_owner_id);

    sqlx::query(
        r#"
        UPDATE pipeline_steps
        SET name = $1, description = $2, step_order = $3,
            duration_days = $4, task_owner_id = $5
        WHERE id = $6
        "#,
    )
    .bind(&name)
    .bind(&description)
    .bind(step_order)
    .bind(duration_days)
    .bind(task_owner_id)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await
}

/// Delete a step and close the order gap it leaves.
///
/// Runs in a transaction: the surviving steps of the pipeline are re-indexed
/// positionally to 1..=N, which repairs the sequence even if it had been left
/// inconsistent. Returns false if the step does not exist.
pub async fn delete_and_reindex(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let pipeline_id: Option<Uuid> =
        sqlx::query_scalar("DELETE FROM pipeline_steps WHERE id = $1 RETURNING pipeline_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some(pipeline_id) = pipeline_id else {
        return Ok(false);
    };

    sqlx::query(
        r#"
        UPDATE pipeline_steps s
        SET step_order = ranked.rn::INTEGER
        FROM (
            SELECT id, ROW_NUMBER() OVER (ORDER BY step_order, id) AS rn
            FROM pipeline_steps
            WHERE pipeline_id = $1
        ) ranked
        WHERE s.id = ranked.id
        "#,
    )
    .bind(pipeline_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct StepRow {
    id: Uuid,
    pipeline_id: Uuid,
    name: String,
    description: Option<String>,
    step_order: i32,
    duration_days: Option<i32>,
    task_owner_id: Option<Uuid>,
    owner_name: Option<String>,
    owner_email: Option<String>,
}

impl From<StepRow> for PipelineStep {
    fn from(row: StepRow) -> Self {
        let task_owner = row.task_owner_id.map(|owner_id| TaskOwner {
            id: owner_id,
            name: row.owner_name,
            email: row.owner_email,
        });

        PipelineStep {
            id: row.id,
            pipeline_id: row.pipeline_id,
            name: row.name,
            description: row.description,
            step_order: row.step_order,
            duration_days: row.duration_days,
            task_owner_id: row.task_owner_id,
            task_owner,
        }
    }
}
