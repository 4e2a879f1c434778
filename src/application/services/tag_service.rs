use crate::application::client::Client;
use crate::application::interfaces::TagService;
use crate::error::AppError;
use crate::model::requests::TagRequest;
use crate::model::responses::Tag;
use crate::model::utils::{decode, require_fields};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
impl TagService for Client {
    async fn create_tag(&self, workspace_id: u64, params: &TagRequest) -> Result<Tag, AppError> {
        let body = require_fields(params, &["name"])?;
        let value = self
            .connection()
            .post(&format!("workspaces/{workspace_id}/tags"), &body)
            .await?;
        decode(value)
    }

    async fn update_tag(
        &self,
        workspace_id: u64,
        tag_id: u64,
        params: &TagRequest,
    ) -> Result<Tag, AppError> {
        let path = format!("workspaces/{workspace_id}/tags/{tag_id}");
        decode(self.connection().put(&path, params).await?)
    }

    async fn delete_tag(&self, workspace_id: u64, tag_id: u64) -> Result<Value, AppError> {
        self.connection()
            .delete(&format!("workspaces/{workspace_id}/tags/{tag_id}"))
            .await
    }
}
