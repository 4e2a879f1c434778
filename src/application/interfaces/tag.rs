use crate::error::AppError;
use crate::model::requests::TagRequest;
use crate::model::responses::Tag;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the tag service
#[async_trait]
pub trait TagService: Send + Sync {
    /// Creates a tag; `name` is required
    async fn create_tag(&self, workspace_id: u64, params: &TagRequest) -> Result<Tag, AppError>;

    /// Renames a tag
    async fn update_tag(
        &self,
        workspace_id: u64,
        tag_id: u64,
        params: &TagRequest,
    ) -> Result<Tag, AppError>;

    /// Deletes a tag; returns the raw response body
    async fn delete_tag(&self, workspace_id: u64, tag_id: u64) -> Result<Value, AppError>;
}
