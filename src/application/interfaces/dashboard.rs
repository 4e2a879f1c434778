use crate::error::AppError;
use crate::model::responses::Dashboard;
use async_trait::async_trait;

/// Interface for the workspace dashboard
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Gets all activity, the most active user and top activity of a workspace
    async fn dashboard(&self, workspace_id: u64) -> Result<Dashboard, AppError>;
}
