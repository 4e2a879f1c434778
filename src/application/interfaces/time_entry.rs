use crate::error::AppError;
use crate::model::requests::{TagsUpdateRequest, TimeEntryRequest};
use crate::model::responses::{TagsUpdateResponse, TimeEntry};
use crate::model::utils::Timestamp;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the time entry service
#[async_trait]
pub trait TimeEntryService: Send + Sync {
    /// Creates a time entry
    ///
    /// `created_with` defaults to this library's name; `wid`, `start`,
    /// `duration` and `created_with` are required.
    async fn create_time_entry(
        &self,
        workspace_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError>;

    /// Starts a running time entry now
    ///
    /// `workspace_id` is required; `start` and `duration` are overwritten.
    async fn start_time_entry(
        &self,
        workspace_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError>;

    /// Stops a running time entry
    async fn stop_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
    ) -> Result<TimeEntry, AppError>;

    /// Gets a time entry of the current user
    async fn get_time_entry(&self, time_entry_id: u64) -> Result<TimeEntry, AppError>;

    /// Gets the running time entry, if any
    async fn get_current_time_entry(&self) -> Result<Option<TimeEntry>, AppError>;

    /// Updates a time entry
    async fn update_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
        params: &TimeEntryRequest,
    ) -> Result<TimeEntry, AppError>;

    /// Deletes a time entry; returns the raw response body
    async fn delete_time_entry(
        &self,
        workspace_id: u64,
        time_entry_id: u64,
    ) -> Result<Value, AppError>;

    /// Gets the time entries of the current user between two instants
    ///
    /// Defaults: nine days ago up to now.
    async fn get_time_entries(
        &self,
        start_date: Option<Timestamp>,
        end_date: Option<Timestamp>,
    ) -> Result<Vec<TimeEntry>, AppError>;

    /// Adds or removes tags on several time entries in one request
    async fn update_time_entries_tags(
        &self,
        workspace_id: u64,
        time_entry_ids: &[u64],
        params: &TagsUpdateRequest,
    ) -> Result<TagsUpdateResponse, AppError>;

    /// Same as `update_time_entries_tags`, then clears the tags of entries
    /// left without any after a removal
    async fn update_time_entries_tags_fixed(
        &self,
        workspace_id: u64,
        time_entry_ids: &[u64],
        params: &TagsUpdateRequest,
    ) -> Result<TagsUpdateResponse, AppError>;
}
