//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between repositories and contain domain logic.

pub mod member;
pub mod pipeline;
pub mod step;

// Re-export for convenience
pub use member as member_service;
pub use pipeline as pipeline_service;
pub use step as step_service;
