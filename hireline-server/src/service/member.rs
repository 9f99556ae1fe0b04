//! Member Service
//!
//! Business logic for the organization member roster.

use hireline_core::domain::member::OrgMember;
use hireline_core::dto::member::CreateMember;
use sqlx::PgPool;

use crate::repository::member_repository;

/// Service error type
#[derive(Debug)]
pub enum MemberError {
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for MemberError {
    fn from(err: sqlx::Error) -> Self {
        MemberError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, MemberError>;

/// Register a new member
pub async fn create_member(pool: &PgPool, req: CreateMember) -> Result<OrgMember> {
    validate_member_request(&req)?;

    let member = member_repository::create(pool, req).await?;

    tracing::info!("Member registered: {}", member.id);

    Ok(member)
}

/// List all members
pub async fn list_members(pool: &PgPool) -> Result<Vec<OrgMember>> {
    let members = member_repository::list_all(pool).await?;
    Ok(members)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_member_request(req: &CreateMember) -> Result<()> {
    let has_name = req.name.as_deref().is_some_and(|n| !n.trim().is_empty());
    let has_email = req.email.as_deref().is_some_and(|e| !e.trim().is_empty());

    if !has_name && !has_email {
        return Err(MemberError::ValidationError(
            "A member needs a name or an email".to_string(),
        ));
    }

    if let Some(email) = req.email.as_deref() {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(MemberError::ValidationError(format!(
                "Invalid email address: {}",
                email
            )));
        }
    }

    Ok(())
}
