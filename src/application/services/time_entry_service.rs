use crate::application::client::Client;
use crate::application::interfaces::TimeEntryService;
use crate::constants::{TIME_ENTRIES_DAYS_BACK, USER_AGENT};
use crate::error::AppError;
use crate::model::http::NO_QUERY;
use crate::model::requests::{PatchOperation, TagAction, TagsUpdateRequest, TimeEntryRequest};
use crate::model::responses::{TagsUpdateResponse, TimeEntry};
use crate::model::utils::{
    Timestamp, decode, decode_list, decode_optional, iso8601, require_fields, require_params,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tracing::{debug, info};

fn with_default_created_with(params: &TimeEntryRequest) -> TimeEntryRequest {
    let mut params = params.clone();
    params
        .created_with
        .get_or_insert_with(|| USER_AGENT.to_string());
    params
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Removes `removed` from the entry's tags; true when nothing is left
fn strip_tags(entry: &mut TimeEntry, removed: &[String]) -> bool {
    match entry.tags.as_mut() {
        Some(tags) => {
            tags.retain(|tag| !removed.contains(tag));
            tags.is_empty()
        }
        None => false,
    }
}

#[async_trait]
impl TimeEntryService for Client {
    async fn create_time_entry(
        &self,
        workspace_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError> {
        let params = with_default_created_with(params);
        let body = require_fields(&params, &["wid", "start", "duration", "created_with"])?;

        info!("Creating time entry in workspace {}", workspace_id);
        let value = self
            .connection()
            .post(&format!("workspaces/{workspace_id}/time_entries"), &body)
            .await?;
        decode(value)
    }

    async fn start_time_entry(
        &self,
        workspace_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError> {
        let mut params = with_default_created_with(params);
        require_params(&serde_json::to_value(&params)?, &["workspace_id"])?;
        params.start = Some(iso8601(Utc::now())?);
        params.duration = Some(-1);

        info!("Starting time entry in workspace {}", workspace_id);
        let value = self
            .connection()
            .post(&format!("workspaces/{workspace_id}/time_entries"), &params)
            .await?;
        decode(value)
    }

    async fn stop_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
    ) -> Result<TimeEntry, AppError> {
        info!("Stopping time entry {}", time_entry_id);
        let path = format!("workspaces/{workspace_id}/time_entries/{time_entry_id}/stop");
        decode(self.connection().patch(&path, &json!({})).await?)
    }

    async fn get_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry, AppError> {
        let path = format!("me/time_entries/{time_entry_id}");
        decode(self.connection().get(&path, NO_QUERY).await?)
    }

    async fn get_current_time_entry(&self) -> Result<Option<TimeEntry>, AppError> {
        let value = self
            .connection()
            .get("me/time_entries/current", NO_QUERY)
            .await?;
        decode_optional(value)
    }

    async fn update_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError> {
        let path = format!("workspaces/{workspace_id}/time_entries/{time_entry_id}");
        decode(self.connection().put(&path, params).await?)
    }

    async fn delete_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
    ) -> Result<Value, AppError> {
        info!("Deleting time entry {}", time_entry_id);
        self.connection()
            .delete(&format!(
                "workspaces/{workspace_id}/time_entries/{time_entry_id}"
            ))
            .await
    }

    async fn get_time_entries(
        &self,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
    ) -> Result<Vec<TimeEntry>, AppError> {
        let now = Utc::now();
        let start_date = match start_date {
            Some(ts) => iso8601(ts)?,
            None => iso8601(now - Duration::days(TIME_ENTRIES_DAYS_BACK))?,
        };
        let end_date = match end_date {
            Some(ts) => iso8601(ts)?,
            None => iso8601(now)?,
        };

        let value = self
            .connection()
            .get(
                "me/time_entries",
                &[("start_date", start_date), ("end_date", end_date)],
            )
            .await?;
        let entries: Vec<TimeEntry> = decode_list(value)?;
        debug!("Time entries obtained: {}", entries.len());
        Ok(entries)
    }

    async fn update_time_entries_tags(
        &self,
        workspace_id: u64,
        time_entry_ids: &[u64],
        params: &TagsUpdateRequest,
    ) -> Result<TagsUpdateResponse, AppError> {
        if time_entry_ids.is_empty() {
            return Ok(TagsUpdateResponse::Entries(Vec::new()));
        }
        require_fields(params, &["tags", "tag_action"])?;

        let operations = [PatchOperation {
            op: params
                .tag_action
                .map(|action| action.to_string())
                .unwrap_or_default(),
            path: "/tags".to_string(),
            value: json!(params.tags),
        }];
        let path = format!(
            "workspaces/{workspace_id}/time_entries/{}",
            join_ids(time_entry_ids)
        );
        decode(self.connection().patch(&path, &operations).await?)
    }

    async fn update_time_entries_tags_fixed(
        &self,
        workspace_id: u64,
        time_entry_ids: &[u64],
        params: &TagsUpdateRequest,
    ) -> Result<TagsUpdateResponse, AppError> {
        let response = self
            .update_time_entries_tags(workspace_id, time_entry_ids, params)
            .await?;
        if params.tag_action != Some(TagAction::Remove) {
            return Ok(response);
        }

        let removed = params.tags.clone().unwrap_or_default();
        let mut cleared = Vec::new();
        let response = match response {
            TagsUpdateResponse::Entries(mut entries) => {
                for entry in entries.iter_mut() {
                    if strip_tags(entry, &removed) {
                        cleared.push(entry.id);
                    }
                }
                TagsUpdateResponse::Entries(entries)
            }
            TagsUpdateResponse::Entry(mut entry) => {
                if strip_tags(&mut entry, &removed) {
                    cleared.push(entry.id);
                }
                TagsUpdateResponse::Entry(entry)
            }
            bulk @ TagsUpdateResponse::Bulk(_) => return Ok(bulk),
        };

        if !cleared.is_empty() {
            debug!("Clearing every tag of {} time entries", cleared.len());
            let operations = [PatchOperation {
                op: "replace".to_string(),
                path: "/tags".to_string(),
                value: json!([]),
            }];
            let path = format!("workspaces/{workspace_id}/time_entries/{}", join_ids(&cleared));
            self.connection().patch(&path, &operations).await?;
        }

        Ok(response)
    }
}
