//! Hireline Core
//!
//! Core types and abstractions for the Hireline hiring-pipeline platform.
//!
//! This crate contains:
//! - Domain types: Core business entities (Pipeline, PipelineStep, OrgMember)
//! - DTOs: Data transfer objects for client/server communication
//! - Ordering: Pure step-order arithmetic shared by the server and the editor

pub mod domain;
pub mod dto;
pub mod ordering;
