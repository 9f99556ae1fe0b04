//! Hireline Editor
//!
//! Client-side optimistic editing of a pipeline's ordered step list.
//!
//! Every mutation runs a three-phase protocol against the local projection:
//!
//! 1. snapshot the current projection,
//! 2. apply the mutation optimistically so callers render the result before
//!    the server has acknowledged it,
//! 3. on success, reconcile the projection with the canonical server records;
//!    on failure, restore the phase-1 snapshot verbatim.
//!
//! The projection (`StepStore`) is an owned value injected into the
//! coordinator (`StepEditor`), so independent editors and tests get isolated
//! state. The coordinator keeps it behind a mutex and takes `&self` for every
//! operation: an editor shared through an `Arc` can have mutations in flight
//! concurrently, and the store's generation token decides whose completion
//! may reconcile. The server is reached through the `StepApi` trait,
//! implemented for `hireline_client::PipelineClient` and for mocks in tests.

pub mod api;
pub mod coordinator;
pub mod display;
pub mod store;

pub use api::StepApi;
pub use coordinator::{Direction, EditError, StepDraft, StepEditor};
pub use store::{StepStore, StoreSnapshot};
