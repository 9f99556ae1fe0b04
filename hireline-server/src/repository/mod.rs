//! Repository Module
//!
//! Data access layer for the server.
//! Each repository handles database operations for a specific domain entity.

pub mod member;
pub mod pipeline;
pub mod step;

// Re-export for convenience
pub use member as member_repository;
pub use pipeline as pipeline_repository;
pub use step as step_repository;
