use crate::application::client::Client;
use crate::application::interfaces::ProjectService;
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::requests::ProjectRequest;
use crate::model::responses::{Project, ProjectUser, Task};
use crate::model::utils::{decode, decode_list, require_fields};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ProjectService for Client {
    async fn create_project(
        &self,
        workspace_id: u64,
        params: &ProjectRequest,
    ) -> Result<Project, AppError> {
        let mut params = params.clone();
        params.active.get_or_insert(true);
        let body = require_fields(&params, &["name"])?;

        info!("Creating project in workspace {}", workspace_id);
        let value = self
            .connection()
            .post(&format!("workspaces/{workspace_id}/projects"), &body)
            .await?;
        decode(value)
    }

    async fn get_project(&self, workspace_id: u64, project_id: u64) -> Result<Project, AppError> {
        let path = format!("workspaces/{workspace_id}/projects/{project_id}");
        decode(self.connection().get(&path, NO_QUERY).await?)
    }

    async fn update_project(
        &self,
        workspace_id: u64,
        project_id: u64,
        params: &ProjectRequest,
    ) -> Result<Project, AppError> {
        let path = format!("workspaces/{workspace_id}/projects/{project_id}");
        decode(self.connection().put(&path, params).await?)
    }

    async fn delete_project(&self, workspace_id: u64, project_id: u64) -> Result<Value, AppError> {
        info!("Deleting project {} in workspace {}", project_id, workspace_id);
        self.connection()
            .delete(&format!("workspaces/{workspace_id}/projects/{project_id}"))
            .await
    }

    async fn get_project_users(
        &self,
        workspace_id: u64,
        project_id: u64,
    ) -> Result<Vec<ProjectUser>, AppError> {
        let path = format!("workspaces/{workspace_id}/project_users");
        let value = self
            .connection()
            .get(&path, &[("project_ids", project_id)])
            .await?;
        decode_list(value)
    }

    async fn get_project_tasks(
        &self,
        workspace_id: u64,
        project_id: u64,
    ) -> Result<Vec<Task>, AppError> {
        let path = format!("workspaces/{workspace_id}/tasks");
        let value = self.connection().get(&path, &[("pid", project_id)]).await?;
        decode_list(value)
    }

    async fn delete_projects(&self, workspace_id: u64, project_ids: &[u64]) -> Result<(), AppError> {
        for project_id in project_ids {
            self.delete_project(workspace_id, *project_id).await?;
        }
        debug!("Deleted {} projects", project_ids.len());
        Ok(())
    }
}
