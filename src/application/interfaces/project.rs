use crate::error::AppError;
use crate::model::requests::ProjectRequest;
use crate::model::responses::{Project, ProjectUser, Task};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the project service
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Creates a project
    ///
    /// `name` is required; the project is created active unless `active` is set.
    async fn create_project(
        &self,
        workspace_id: u64,
        params: &ProjectRequest,
    ) -> Result<Project, AppError>;

    /// Gets a project
    async fn get_project(&self, workspace_id: u64, project_id: u64) -> Result<Project, AppError>;

    /// Updates a project
    async fn update_project(
        &self,
        workspace_id: u64,
        project_id: u64,
        params: &ProjectRequest,
    ) -> Result<Project, AppError>;

    /// Deletes a project; returns the raw response body
    async fn delete_project(&self, workspace_id: u64, project_id: u64) -> Result<Value, AppError>;

    /// Gets the members of a project
    async fn get_project_users(
        &self,
        workspace_id: u64,
        project_id: u64,
    ) -> Result<Vec<ProjectUser>, AppError>;

    /// Gets the tasks of a project
    async fn get_project_tasks(
        &self,
        workspace_id: u64,
        project_id: u64,
    ) -> Result<Vec<Task>, AppError>;

    /// Deletes several projects, one request each, stopping at the first failure
    async fn delete_projects(&self, workspace_id: u64, project_ids: &[u64]) -> Result<(), AppError>;
}
