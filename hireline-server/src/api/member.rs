//! Member API Handlers
//!
//! HTTP endpoints for the organization member roster.

use axum::{Json, extract::State};
use hireline_core::domain::member::OrgMember;
use hireline_core::dto::member::CreateMember;
use sqlx::PgPool;

use crate::api::error::ApiResult;
use crate::service::member_service;

/// POST /member/create
/// Register an organization member
pub async fn create_member(
    State(pool): State<PgPool>,
    Json(req): Json<CreateMember>,
) -> ApiResult<Json<OrgMember>> {
    tracing::info!("Registering member");

    let member = member_service::create_member(&pool, req).await?;

    Ok(Json(member))
}

/// GET /member/list
/// List the organization's members
pub async fn list_members(State(pool): State<PgPool>) -> ApiResult<Json<Vec<OrgMember>>> {
    tracing::debug!("Listing members");

    let members = member_service::list_members(&pool).await?;

    Ok(Json(members))
}
