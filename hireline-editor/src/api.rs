//! Server API seam
//!
//! The coordinator talks to the persistence API through this trait so tests
//! can inject a scripted backend and the CLI can hand in a real
//! [`PipelineClient`].

use async_trait::async_trait;
use hireline_client::{PipelineClient, Result};
use hireline_core::domain::pipeline::{Pipeline, PipelineStep};
use hireline_core::dto::step::{CreateStep, UpdateStep};
use uuid::Uuid;

/// Persistence operations the editor depends on.
///
/// Every method returns the canonical persisted record (or unit for deletes)
/// or a transport/API error; the coordinator never inspects partial state.
#[async_trait]
pub trait StepApi: Send + Sync {
    async fn fetch_pipeline(&self, pipeline_id: Uuid) -> Result<Pipeline>;
    async fn create_step(&self, req: CreateStep) -> Result<PipelineStep>;
    async fn update_step(&self, step_id: Uuid, req: UpdateStep) -> Result<PipelineStep>;
    async fn delete_step(&self, step_id: Uuid) -> Result<()>;
}

#[async_trait]
impl StepApi for PipelineClient {
    async fn fetch_pipeline(&self, pipeline_id: Uuid) -> Result<Pipeline> {
        self.get_pipeline(pipeline_id).await
    }

    async fn create_step(&self, req: CreateStep) -> Result<PipelineStep> {
        PipelineClient::create_step(self, req).await
    }

    async fn update_step(&self, step_id: Uuid, req: UpdateStep) -> Result<PipelineStep> {
        PipelineClient::update_step(self, step_id, req).await
    }

    async fn delete_step(&self, step_id: Uuid) -> Result<()> {
        PipelineClient::delete_step(self, step_id).await
    }
}
