//! Pipeline step API endpoints

use crate::PipelineClient;
use crate::error::{ClientError, Result};
use hireline_core::domain::pipeline::PipelineStep;
use hireline_core::dto::step::{CreateStep, UpdateStep};
use reqwest::StatusCode;
use uuid::Uuid;

impl PipelineClient {
    /// Create a pipeline step at the explicit order carried in the request.
    ///
    /// Returns the canonical persisted record, task owner resolved.
    pub async fn create_step(&self, req: CreateStep) -> Result<PipelineStep> {
        let pipeline_id = req.pipeline_id;
        let url = format!("{}/step/create", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::PipelineNotFound(pipeline_id));
        }
        self.handle_response(response).await
    }

    /// Apply a partial update to a step.
    ///
    /// Absent fields are untouched; explicit nulls clear nullable fields.
    pub async fn update_step(&self, step_id: Uuid, req: UpdateStep) -> Result<PipelineStep> {
        let url = format!("{}/step/{}", self.base_url, step_id);
        let response = self.client.patch(&url).json(&req).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::StepNotFound(step_id));
        }
        self.handle_response(response).await
    }

    /// Delete a step. The server closes the resulting order gap.
    pub async fn delete_step(&self, step_id: Uuid) -> Result<()> {
        let url = format!("{}/step/{}", self.base_url, step_id);
        let response = self.client.delete(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::StepNotFound(step_id));
        }
        self.handle_empty_response(response).await
    }
}
