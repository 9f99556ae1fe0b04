//! Common types used across CLI modules

use uuid::Uuid;

/// Identifier that can be either a full UUID or an unambiguous prefix
#[derive(Debug, Clone)]
pub enum IdOrPrefix {
    /// Full UUID
    Full(Uuid),
    /// Prefix that should uniquely identify a resource
    Prefix(String),
}

impl IdOrPrefix {
    /// Parse a string into an IdOrPrefix
    ///
    /// Attempts to parse as a full UUID first, otherwise treats as a prefix
    pub fn parse(input: &str) -> Self {
        if let Ok(uuid) = Uuid::parse_str(input) {
            IdOrPrefix::Full(uuid)
        } else {
            IdOrPrefix::Prefix(input.to_string())
        }
    }

    /// Get the UUID if this is a full ID
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            IdOrPrefix::Full(uuid) => Some(*uuid),
            IdOrPrefix::Prefix(_) => None,
        }
    }

    /// Get the prefix string
    pub fn as_str(&self) -> String {
        match self {
            IdOrPrefix::Full(uuid) => uuid.to_string(),
            IdOrPrefix::Prefix(prefix) => prefix.clone(),
        }
    }
}

/// Reference to a step within a pipeline
///
/// Steps are short-lived and usually addressed by the order number shown in
/// listings; a UUID or prefix works too.
#[derive(Debug, Clone)]
pub enum StepRef {
    /// The step's `step_order` as displayed
    Order(i32),
    /// The step's UUID or an unambiguous prefix of it
    Id(IdOrPrefix),
}

impl StepRef {
    pub fn parse(input: &str) -> Self {
        match input.parse::<i32>() {
            Ok(order) => StepRef::Order(order),
            Err(_) => StepRef::Id(IdOrPrefix::parse(input)),
        }
    }
}
