use crate::error::AppError;
use crate::model::requests::{ActiveFilter, ClientRequest};
use crate::model::responses::{Project, WorkspaceClient};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the client (customer) service
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Creates a client
    ///
    /// # Arguments
    /// * `workspace_id` - Workspace the client belongs to
    /// * `params` - `name` and `wid` are required
    async fn create_client(
        &self,
        workspace_id: u64,
        params: &ClientRequest,
    ) -> Result<WorkspaceClient, AppError>;

    /// Gets a client
    async fn get_client(&self, workspace_id: u64, client_id: u64)
    -> Result<WorkspaceClient, AppError>;

    /// Updates a client
    async fn update_client(
        &self,
        workspace_id: u64,
        client_id: u64,
        params: &ClientRequest,
    ) -> Result<WorkspaceClient, AppError>;

    /// Deletes a client; returns the raw response body
    async fn delete_client(&self, workspace_id: u64, client_id: u64) -> Result<Value, AppError>;

    /// Gets the projects of a client, optionally filtered on `active`
    async fn get_client_projects(
        &self,
        workspace_id: u64,
        client_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Project>, AppError>;
}
