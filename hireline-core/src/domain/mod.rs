//! Core domain types
//!
//! This module contains the core domain structures used across Hireline
//! services. These types represent the fundamental business entities and are
//! shared between the server (for persistence) and the editor and CLI (for
//! display and mutation).

pub mod member;
pub mod pipeline;
pub mod template;
