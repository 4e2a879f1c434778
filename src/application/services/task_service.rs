use crate::application::client::Client;
use crate::application::interfaces::TaskService;
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::requests::TaskRequest;
use crate::model::responses::Task;
use crate::model::utils::{decode, require_fields};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
impl TaskService for Client {
    async fn create_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        params: &TaskRequest,
    ) -> Result<Task, AppError> {
        let body = require_fields(params, &["name"])?;
        let path = format!("workspaces/{workspace_id}/projects/{project_id}/tasks");
        decode(self.connection().post(&path, &body).await?)
    }

    async fn get_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        task_id: u64,
    ) -> Result<Task, AppError> {
        let path = format!("workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}");
        decode(self.connection().get(&path, NO_QUERY).await?)
    }

    async fn update_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        task_id: u64,
        params: &TaskRequest,
    ) -> Result<Task, AppError> {
        let path = format!("workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}");
        decode(self.connection().put(&path, params).await?)
    }

    async fn delete_task(
        &self,
        workspace_id: u64,
        project_id: u64,
        task_id: u64,
    ) -> Result<Value, AppError> {
        self.connection()
            .delete(&format!(
                "workspaces/{workspace_id}/projects/{project_id}/tasks/{task_id}"
            ))
            .await
    }
}
