use crate::application::client::Client;
use crate::application::interfaces::ClientService;
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::requests::{ActiveFilter, ClientRequest};
use crate::model::responses::{Project, WorkspaceClient};
use crate::model::utils::{decode, decode_list, require_fields};
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl ClientService for Client {
    async fn create_client(
        &self,
        workspace_id: u64,
        params: &ClientRequest,
    ) -> Result<WorkspaceClient, AppError> {
        let body = require_fields(params, &["name", "wid"])?;
        info!("Creating client in workspace {}", workspace_id);
        let value = self
            .connection()
            .post(&format!("workspaces/{workspace_id}/clients"), &body)
            .await?;
        decode(value)
    }

    async fn get_client(
        &self,
        workspace_id: u64,
        client_id: u64,
    ) -> Result<WorkspaceClient, AppError> {
        let path = format!("workspaces/{workspace_id}/clients/{client_id}");
        decode(self.connection().get(&path, NO_QUERY).await?)
    }

    async fn update_client(
        &self,
        workspace_id: u64,
        client_id: u64,
        params: &ClientRequest,
    ) -> Result<WorkspaceClient, AppError> {
        let path = format!("workspaces/{workspace_id}/clients/{client_id}");
        decode(self.connection().put(&path, params).await?)
    }

    async fn delete_client(&self, workspace_id: u64, client_id: u64) -> Result<Value, AppError> {
        info!("Deleting client {} in workspace {}", client_id, workspace_id);
        self.connection()
            .delete(&format!("workspaces/{workspace_id}/clients/{client_id}"))
            .await
    }

    async fn get_client_projects(
        &self,
        workspace_id: u64,
        client_id: u64,
        active: Option<ActiveFilter>,
    ) -> Result<Vec<Project>, AppError> {
        let mut query = vec![("clients", client_id.to_string())];
        if let Some(active) = active {
            query.push(("active", active.to_string()));
        }
        let path = format!("workspaces/{workspace_id}/projects");
        decode_list(self.connection().get(&path, &query).await?)
    }
}
