/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Toggl Reports API v3
//!
//! Reports are requested per workspace. JSON reports come back decoded,
//! PDF/CSV/XLS reports come back as raw bytes and can be written to disk with
//! the `write_*` methods, which pick the format from the file extension.

use crate::application::auth::Credentials;
use crate::application::config::Config;
use crate::constants::{REPORT_DAYS_BACK, REPORTS_V3_URL, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{Connection, ConnectionOptions};
use crate::model::requests::{ReportFormat, ReportKind, ReportRequest};
use crate::model::responses::{Report, ReportClient};
use crate::model::utils::decode_list;
use chrono::{Duration, Local};
use serde_json::{Map, Value, json};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Toggl Reports API v3
#[derive(Debug, Clone)]
pub struct ReportsClient {
    connection: Arc<Connection>,
    workspace_id: Option<u64>,
    user_agent: String,
}

impl ReportsClient {
    /// Creates a reports client for the public API with default options
    pub fn new(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_options(credentials, REPORTS_V3_URL, ConnectionOptions::default())
    }

    /// Creates a reports client for `base_url` with explicit options
    pub fn with_options(
        credentials: Credentials,
        base_url: &str,
        options: ConnectionOptions,
    ) -> Result<Self, AppError> {
        let connection = Connection::open(credentials, Some(base_url), options)?;
        Ok(Self {
            connection: Arc::new(connection),
            workspace_id: None,
            user_agent: USER_AGENT.to_string(),
        })
    }

    /// Creates a reports client with explicit credentials and the settings of `config`
    pub fn with_config(credentials: Credentials, config: &Config) -> Result<Self, AppError> {
        Self::with_options(
            credentials,
            &config.rest_api.reports_url,
            config.connection_options(),
        )
    }

    /// Creates a reports client entirely from `config`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_config(config.credentials()?, config)
    }

    /// Workspace the reports are generated for
    pub fn workspace_id(&self) -> Option<u64> {
        self.workspace_id
    }

    /// Sets the workspace the reports are generated for
    pub fn set_workspace_id(&mut self, workspace_id: u64) {
        self.workspace_id = Some(workspace_id);
    }

    /// Builder variant of [`set_workspace_id`](Self::set_workspace_id)
    #[must_use]
    pub fn with_workspace_id(mut self, workspace_id: u64) -> Self {
        self.workspace_id = Some(workspace_id);
        self
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    fn require_workspace(&self) -> Result<u64, AppError> {
        self.workspace_id
            .ok_or_else(|| AppError::Config("workspace_id is required".to_string()))
    }

    /// Lists the clients usable as report filters
    pub async fn list_clients(&self) -> Result<Vec<ReportClient>, AppError> {
        let workspace_id = self.require_workspace()?;
        let value = self
            .connection
            .post(
                &format!("workspace/{workspace_id}/filters/clients"),
                &json!({ "start": 0 }),
            )
            .await?;
        decode_list(value)
    }

    /// Generates a report
    ///
    /// The body starts from `user_agent` and a `start_date` six days ago;
    /// every field set in `params` overrides or extends it.
    pub async fn report(
        &self,
        kind: ReportKind,
        format: ReportFormat,
        params: &ReportRequest,
    ) -> Result<Report, AppError> {
        let workspace_id = self.require_workspace()?;
        let body = self.report_body(params)?;
        let path = format!(
            "workspace/{workspace_id}/{}/time_entries{}",
            kind.segment(),
            format.extension()
        );

        info!("Requesting {:?} report as {:?}", kind, format);
        if format.is_document() {
            let bytes = self.connection.post_raw(&path, &body).await?;
            debug!("Report received: {} bytes", bytes.len());
            Ok(Report::Document(bytes))
        } else {
            Ok(Report::Json(self.connection.post(&path, &body).await?))
        }
    }

    /// Builds the request body of a report
    pub fn report_body(&self, params: &ReportRequest) -> Result<Value, AppError> {
        let start_date = (Local::now() - Duration::days(REPORT_DAYS_BACK))
            .format("%Y-%m-%d")
            .to_string();

        let mut body = Map::new();
        body.insert("user_agent".to_string(), Value::String(self.user_agent.clone()));
        body.insert("start_date".to_string(), Value::String(start_date));
        if let Value::Object(overrides) = serde_json::to_value(params)? {
            body.extend(overrides);
        }
        Ok(Value::Object(body))
    }

    /// Weekly report
    pub async fn weekly(
        &self,
        format: ReportFormat,
        params: &ReportRequest,
    ) -> Result<Report, AppError> {
        self.report(ReportKind::Weekly, format, params).await
    }

    /// Detailed report
    pub async fn details(
        &self,
        format: ReportFormat,
        params: &ReportRequest,
    ) -> Result<Report, AppError> {
        self.report(ReportKind::Details, format, params).await
    }

    /// Summary report
    pub async fn summary(
        &self,
        format: ReportFormat,
        params: &ReportRequest,
    ) -> Result<Report, AppError> {
        self.report(ReportKind::Summary, format, params).await
    }

    /// Generates a report in the format given by the extension of `path`
    /// (`.pdf`, `.csv`, `.xls`, none for JSON) and writes it to `path`
    pub async fn write_report(
        &self,
        path: impl AsRef<Path>,
        kind: ReportKind,
        params: &ReportRequest,
    ) -> Result<(), AppError> {
        let path = path.as_ref();
        let format = ReportFormat::from_path(path)?;
        let report = self.report(kind, format, params).await?;
        tokio::fs::write(path, report.to_bytes()?).await?;
        info!("Report written to {}", path.display());
        Ok(())
    }

    /// Writes a weekly report to `path`
    pub async fn write_weekly(
        &self,
        path: impl AsRef<Path>,
        params: &ReportRequest,
    ) -> Result<(), AppError> {
        self.write_report(path, ReportKind::Weekly, params).await
    }

    /// Writes a detailed report to `path`
    pub async fn write_details(
        &self,
        path: impl AsRef<Path>,
        params: &ReportRequest,
    ) -> Result<(), AppError> {
        self.write_report(path, ReportKind::Details, params).await
    }

    /// Writes a summary report to `path`
    pub async fn write_summary(
        &self,
        path: impl AsRef<Path>,
        params: &ReportRequest,
    ) -> Result<(), AppError> {
        self.write_report(path, ReportKind::Summary, params).await
    }

    /// Project dashboard (Toggl pro)
    ///
    /// `params` are extra query parameters such as `page`, `order_field` or
    /// `order_desc`.
    pub async fn project<V: Display>(
        &self,
        project_id: u64,
        params: &[(&str, V)],
    ) -> Result<Value, AppError> {
        let workspace_id = self.require_workspace()?;
        let mut query = vec![
            ("user_agent", self.user_agent.clone()),
            ("workspace_id", workspace_id.to_string()),
            ("project_id", project_id.to_string()),
        ];
        query.extend(params.iter().map(|(k, v)| (*k, v.to_string())));
        self.connection.get("project", &query).await
    }
}
