//! Data Transfer Objects for client/server communication
//!
//! This module contains DTOs used for communication between the Hireline
//! server and its clients (editor, CLI). DTOs are lightweight request and
//! summary shapes distinct from the persisted domain entities.

pub mod member;
pub mod pipeline;
pub mod step;
