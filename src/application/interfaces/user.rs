use crate::error::AppError;
use crate::model::responses::{Project, Tag, Task, TimeEntry, User, Workspace, WorkspaceClient};
use async_trait::async_trait;

/// Interface for the current user service
///
/// Every `my_*` method reads the related data of `user` when given, and
/// otherwise fetches `me` with related data first.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the current user, with clients, projects, tags, tasks, time
    /// entries and workspaces when `with_related_data` is set
    async fn me(&self, with_related_data: bool) -> Result<User, AppError>;

    /// Clients of the current user
    async fn my_clients(&self, user: Option<&User>) -> Result<Vec<WorkspaceClient>, AppError>;

    /// Projects of the current user that are not deleted
    async fn my_projects(&self, user: Option<&User>) -> Result<Vec<Project>, AppError>;

    /// Deleted projects of the current user
    async fn my_deleted_projects(&self, user: Option<&User>) -> Result<Vec<Project>, AppError>;

    /// Tags of the current user
    async fn my_tags(&self, user: Option<&User>) -> Result<Vec<Tag>, AppError>;

    /// Tasks of the current user
    async fn my_tasks(&self, user: Option<&User>) -> Result<Vec<Task>, AppError>;

    /// Time entries of the current user
    async fn my_time_entries(&self, user: Option<&User>) -> Result<Vec<TimeEntry>, AppError>;

    /// Workspaces of the current user
    async fn my_workspaces(&self, user: Option<&User>) -> Result<Vec<Workspace>, AppError>;
}
