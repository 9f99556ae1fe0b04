//! Pipeline-related API endpoints

use crate::PipelineClient;
use crate::error::{ClientError, Result};
use hireline_core::domain::pipeline::Pipeline;
use hireline_core::dto::pipeline::{CreatePipeline, PipelineSummary};
use reqwest::StatusCode;
use uuid::Uuid;

impl PipelineClient {
    /// Create a new pipeline.
    pub async fn create_pipeline(&self, req: CreatePipeline) -> Result<Pipeline> {
        let url = format!("{}/pipeline/create", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List all pipelines, newest first.
    pub async fn list_pipelines(&self) -> Result<Vec<PipelineSummary>> {
        let url = format!("{}/pipeline/list", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a pipeline by ID, steps ordered and owners resolved.
    pub async fn get_pipeline(&self, pipeline_id: Uuid) -> Result<Pipeline> {
        let url = format!("{}/pipeline/{}", self.base_url, pipeline_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::PipelineNotFound(pipeline_id));
        }
        self.handle_response(response).await
    }

    /// Delete a pipeline and all of its steps.
    pub async fn delete_pipeline(&self, pipeline_id: Uuid) -> Result<()> {
        let url = format!("{}/pipeline/{}", self.base_url, pipeline_id);
        let response = self.client.delete(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::PipelineNotFound(pipeline_id));
        }
        self.handle_empty_response(response).await
    }
}
