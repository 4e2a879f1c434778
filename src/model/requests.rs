/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Filter on the `active` flag of projects and tasks
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveFilter {
    /// Only active items
    #[serde(rename = "true")]
    Active,
    /// Only archived or done items
    #[serde(rename = "false")]
    Inactive,
    /// Everything
    Both,
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "true"),
            Self::Inactive => write!(f, "false"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// Parameters for creating or updating a client
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ClientRequest {
    /// Client name, unique in the workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Workspace ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,
    /// Free text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClientRequest {
    /// Create new parameters with the required fields
    pub fn new(name: impl Into<String>, wid: u64) -> Self {
        Self {
            name: Some(name.into()),
            wid: Some(wid),
            ..Default::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Parameters for creating or updating a project
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ProjectRequest {
    /// Project name, unique for client and workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Client ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    /// Whether the project is active; `true` when creating unless set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Whether only project users see the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    /// Whether the project is a template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<bool>,
    /// Template the project is created from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    /// Billable flag (pro workspaces)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Compute estimates from tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_estimates: Option<bool>,
    /// Estimated hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i64>,
    /// Hex color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Hourly rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl ProjectRequest {
    /// Create new parameters with just the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the client
    pub fn with_client_id(mut self, client_id: u64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Set the private flag
    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    /// Set the billable flag
    pub fn with_billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Parameters for creating or renaming a tag
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRequest {
    /// Tag name, unique in the workspace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TagRequest {
    /// Create new parameters with the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Parameters for creating or updating a task
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRequest {
    /// Task name, unique in the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the task is not done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Estimated duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_seconds: Option<i64>,
    /// Assigned user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl TaskRequest {
    /// Create new parameters with the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Set the estimate
    pub fn with_estimated_seconds(mut self, seconds: i64) -> Self {
        self.estimated_seconds = Some(seconds);
        self
    }

    /// Assign the task
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Parameters for creating, starting or updating a time entry
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TimeEntryRequest {
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workspace ID as expected by the create endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wid: Option<u64>,
    /// Workspace ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
    /// Project ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// Task ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    /// Billable flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Start, ISO-8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Stop, ISO-8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    /// Duration in seconds, negative for a running entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Name of the application creating the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_with: Option<String>,
    /// Tag names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Hide start and stop times
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duronly: Option<bool>,
}

impl TimeEntryRequest {
    /// Create new parameters for a workspace
    pub fn new(workspace_id: u64) -> Self {
        Self {
            wid: Some(workspace_id),
            workspace_id: Some(workspace_id),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the project
    pub fn with_project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Set the task
    pub fn with_task_id(mut self, task_id: u64) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Set the start, already ISO-8601 formatted
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the stop, already ISO-8601 formatted
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the creating application
    pub fn with_created_with(mut self, created_with: impl Into<String>) -> Self {
        self.created_with = Some(created_with.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the billable flag
    pub fn with_billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }
}

/// Whether tags are added to or removed from time entries
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    /// Add the tags
    Add,
    /// Remove the tags
    Remove,
}

impl fmt::Display for TagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Parameters for adding or removing tags on several time entries
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagsUpdateRequest {
    /// Tag names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Action to apply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_action: Option<TagAction>,
}

impl TagsUpdateRequest {
    /// Add `tags`
    pub fn add(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            tag_action: Some(TagAction::Add),
        }
    }

    /// Remove `tags`
    pub fn remove(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            tag_action: Some(TagAction::Remove),
        }
    }
}

/// One operation of a JSON patch body
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PatchOperation {
    /// `add`, `remove` or `replace`
    pub op: String,
    /// Target path, e.g. `/tags`
    pub path: String,
    /// Value applied
    pub value: serde_json::Value,
}

/// Kind of report produced by the reports API
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportKind {
    /// Weekly report
    Weekly,
    /// Detailed report
    Details,
    /// Summary report
    Summary,
}

impl ReportKind {
    /// Path segment of the report endpoint
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Details => "search",
            Self::Summary => "summary",
        }
    }
}

/// Output format of a report
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    /// JSON, returned decoded
    Json,
    /// PDF document
    Pdf,
    /// CSV document
    Csv,
    /// XLS document
    Xls,
}

impl ReportFormat {
    /// Suffix appended to the report endpoint
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "",
            Self::Pdf => ".pdf",
            Self::Csv => ".csv",
            Self::Xls => ".xls",
        }
    }

    /// Parses an extension with or without leading dot; empty means JSON
    pub fn from_extension(extension: &str) -> Result<Self, AppError> {
        match extension
            .trim_start_matches('.')
            .to_ascii_lowercase()
            .as_str()
        {
            "" | "json" => Ok(Self::Json),
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            "xls" => Ok(Self::Xls),
            other => Err(AppError::InvalidInput(format!(
                "unsupported report extension: .{other}"
            ))),
        }
    }

    /// Infers the format from a file name
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        Self::from_extension(
            path.extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default(),
        )
    }

    /// True for PDF, CSV and XLS
    pub fn is_document(&self) -> bool {
        !matches!(self, Self::Json)
    }
}

/// Filters accepted by every report
///
/// Unset fields are not sent; `start_date` defaults to six days ago.
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ReportRequest {
    /// First day, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last day, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Billable filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Client IDs, 0 for entries without client
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub client_ids: Vec<u64>,
    /// Project IDs, 0 for entries without project
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub project_ids: Vec<u64>,
    /// User IDs
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub user_ids: Vec<u64>,
    /// Tag IDs, 0 for entries without tag
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag_ids: Vec<u64>,
    /// Task IDs, 0 for entries without task
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub task_ids: Vec<u64>,
    /// Time entry IDs
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub time_entry_ids: Vec<u64>,
    /// Description filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping, e.g. `projects`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
    /// Sub grouping, e.g. `time_entries`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_grouping: Option<String>,
    /// Ordering field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// `ASC` or `DESC`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>,
    /// Round durations per workspace settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding: Option<i32>,
    /// Rounding in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_minutes: Option<i32>,
}

impl ReportRequest {
    /// Create new parameters for a date range
    pub fn between(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
            ..Default::default()
        }
    }

    /// Restrict to projects
    pub fn with_project_ids(mut self, project_ids: Vec<u64>) -> Self {
        self.project_ids = project_ids;
        self
    }

    /// Restrict to clients
    pub fn with_client_ids(mut self, client_ids: Vec<u64>) -> Self {
        self.client_ids = client_ids;
        self
    }

    /// Restrict to users
    pub fn with_user_ids(mut self, user_ids: Vec<u64>) -> Self {
        self.user_ids = user_ids;
        self
    }

    /// Set the billable filter
    pub fn with_billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    /// Set the grouping
    pub fn with_grouping(mut self, grouping: impl Into<String>) -> Self {
        self.grouping = Some(grouping.into());
        self
    }
}
