use crate::error::AppError;
use crate::model::requests::TaskRequest;
use crate::model::responses::Task;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the task service (pro workspaces only)
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Creates a task; `name` is required
    async fn create_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        params: &TaskRequest,
    ) -> Result<Task, AppError>;

    /// Gets a task
    async fn get_task(&self, workspace_id: u64, project_id: u64, task_id: u64)
    -> Result<Task, AppError>;

    /// Updates a task
    async fn update_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        task_id: u64,
        params: &TaskRequest,
    ) -> Result<Task, AppError>;

    /// Deletes a task; returns the raw response body
    async fn delete_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        task_id: u64,
    ) -> Result<Value, AppError>;
}
