use crate::error::AppError;
use crate::model::requests::ActiveFilter;
use crate::model::responses::{Project, Tag, Task, Workspace, WorkspaceClient, WorkspaceUser};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the workspace service
#[async_trait]
pub trait WorkspaceService: Send + Sync {
    /// Gets the workspaces of the current user
    async fn workspaces(&self) -> Result<Vec<Workspace>, AppError>;

    /// Gets the clients of a workspace
    async fn clients(&self, workspace_id: u64) -> Result<Vec<WorkspaceClient>, AppError>;

    /// Gets the projects of a workspace, optionally filtered on `active`
    async fn projects(
        &self,
        workspace_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Project>, AppError>;

    /// Gets the members of a workspace
    async fn users(
        &self,
        organization_id: u64,
        workspace_id: u64,
    ) -> Result<Vec<WorkspaceUser>, AppError>;

    /// Gets the tasks of a workspace, optionally filtered on `active`
    async fn tasks(
        &self,
        workspace_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Task>, AppError>;

    /// Gets the tags of a workspace
    async fn tags(&self, workspace_id: u64) -> Result<Vec<Tag>, AppError>;

    /// Leaves a workspace; returns the raw response body
    async fn leave_workspace(&self, workspace_id: u64) -> Result<Value, AppError>;
}
