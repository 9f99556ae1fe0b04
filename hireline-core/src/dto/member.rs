//! Member DTOs

use serde::{Deserialize, Serialize};

/// Request to register an organization member
///
/// At least one of `name` and `email` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: Option<String>,
    pub email: Option<String>,
}
