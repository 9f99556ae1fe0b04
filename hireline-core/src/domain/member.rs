//! Organization member domain types

use crate::domain::pipeline::TaskOwner;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Member of the organization that owns the pipelines
///
/// Members are the candidates for step ownership. Name and email are both
/// optional in the upstream identity data, but at least one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgMember {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl OrgMember {
    /// Best available label: name, falling back to email.
    pub fn display_label(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

impl From<&OrgMember> for TaskOwner {
    fn from(member: &OrgMember) -> Self {
        TaskOwner {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
        }
    }
}
