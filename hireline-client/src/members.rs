//! Member roster API endpoints

use crate::PipelineClient;
use crate::error::Result;
use hireline_core::domain::member::OrgMember;
use hireline_core::dto::member::CreateMember;

impl PipelineClient {
    /// Register an organization member.
    pub async fn create_member(&self, req: CreateMember) -> Result<OrgMember> {
        let url = format!("{}/member/create", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List the organization's members.
    pub async fn list_members(&self) -> Result<Vec<OrgMember>> {
        let url = format!("{}/member/list", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
