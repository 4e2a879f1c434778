use crate::application::client::Client;
use crate::application::interfaces::WorkspaceService;
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::requests::ActiveFilter;
use crate::model::responses::{Project, Tag, Task, Workspace, WorkspaceClient, WorkspaceUser};
use crate::model::utils::decode_list;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

fn active_query(active: Option<ActiveFilter>) -> Vec<(&'static str, String)> {
    active
        .map(|a| ("active", a.to_string()))
        .into_iter()
        .collect()
}

#[async_trait]
impl WorkspaceService for Client {
    async fn workspaces(&self) -> Result<Vec<Workspace>, AppError> {
        debug!("Getting workspaces");
        let value = self.connection().get("me/workspaces", NO_QUERY).await?;
        let workspaces: Vec<Workspace> = decode_list(value)?;
        debug!("Workspaces obtained: {}", workspaces.len());
        Ok(workspaces)
    }

    async fn clients(&self, workspace_id: u64) -> Result<Vec<WorkspaceClient>, AppError> {
        let path = format!("workspaces/{workspace_id}/clients");
        let value = self.connection().get(&path, NO_QUERY).await?;
        decode_list(value)
    }

    async fn projects(
        &self,
        workspace_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Project>, AppError> {
        let path = format!("workspaces/{workspace_id}/projects");
        let value = self.connection().get(&path, &active_query(active)).await?;
        let projects: Vec<Project> = decode_list(value)?;
        debug!("Projects obtained for {}: {}", workspace_id, projects.len());
        Ok(projects)
    }

    async fn users(
        &self,
        organization_id: u64,
        workspace_id: u64,
    ) -> Result<Vec<WorkspaceUser>, AppError> {
        let path =
            format!("organizations/{organization_id}/workspaces/{workspace_id}/workspace_users");
        let value = self.connection().get(&path, NO_QUERY).await?;
        decode_list(value)
    }

    async fn tasks(
        &self,
        workspace_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Task>, AppError> {
        let path = format!("workspaces/{workspace_id}/tasks");
        let value = self.connection().get(&path, &active_query(active)).await?;
        decode_list(value)
    }

    async fn tags(&self, workspace_id: u64) -> Result<Vec<Tag>, AppError> {
        let path = format!("workspaces/{workspace_id}/tags");
        let value = self.connection().get(&path, NO_QUERY).await?;
        decode_list(value)
    }

    async fn leave_workspace(&self, workspace_id: u64) -> Result<Value, AppError> {
        info!("Leaving workspace {}", workspace_id);
        self.connection()
            .delete(&format!("workspaces/{workspace_id}/leave"))
            .await
    }
}
