use crate::application::client::Client;
use crate::application::interfaces::DashboardService;
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::responses::Dashboard;
use async_trait::async_trait;

#[async_trait]
impl DashboardService for Client {
    async fn dashboard(&self, workspace_id: u64) -> Result<Dashboard, AppError> {
        let base = format!("workspaces/{workspace_id}/dashboard");
        let connection = self.connection();

        Ok(Dashboard {
            all_activity: connection.get(&format!("{base}/all_activity"), NO_QUERY).await?,
            most_active_user: connection.get(&format!("{base}/most_active"), NO_QUERY).await?,
            activity: connection.get(&format!("{base}/top_activity"), NO_QUERY).await?,
        })
    }
}
