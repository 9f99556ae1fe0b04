//! Member Repository
//!
//! Handles all database operations related to organization members.

use hireline_core::domain::member::OrgMember;
use hireline_core::dto::member::CreateMember;
use sqlx::PgPool;
use uuid::Uuid;

/// Register a new member
pub async fn create(pool: &PgPool, req: CreateMember) -> Result<OrgMember, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query(
        r#"
        INSERT INTO org_members (id, name, email, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(&req.name)
    .bind(&req.email)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(OrgMember {
        id,
        name: req.name,
        email: req.email,
        created_at: now,
    })
}

/// List all members
pub async fn list_all(pool: &PgPool) -> Result<Vec<OrgMember>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MemberRow>(
        r#"
        SELECT id, name, email, created_at
        FROM org_members
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MemberRow> for OrgMember {
    fn from(row: MemberRow) -> Self {
        OrgMember {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}
