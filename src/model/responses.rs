/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Toggl workspace
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Workspace {
    /// Workspace ID
    pub id: u64,
    /// Organization owning the workspace
    pub organization_id: Option<u64>,
    /// Workspace name
    pub name: String,
    /// Whether someone pays for the workspace
    pub premium: bool,
    /// Whether the current user is an admin
    pub admin: bool,
    /// Default hourly rate
    pub default_hourly_rate: Option<f64>,
    /// Default currency
    pub default_currency: Option<String>,
    /// Only admins may create projects
    pub only_admins_may_create_projects: bool,
    /// Only admins see billable rates
    pub only_admins_see_billable_rates: bool,
    /// Rounding mode
    pub rounding: Option<i32>,
    /// Rounding in minutes
    pub rounding_minutes: Option<i32>,
    /// Last update timestamp
    pub at: Option<String>,
    /// Logo URL
    pub logo_url: Option<String>,
}

/// A client (customer) belonging to a workspace
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WorkspaceClient {
    /// Client ID
    pub id: u64,
    /// Workspace ID
    pub wid: u64,
    /// Client name, unique in the workspace
    pub name: String,
    /// Free text notes
    pub notes: Option<String>,
    /// Whether the client is archived
    pub archived: bool,
    /// Last update timestamp
    pub at: Option<String>,
    /// Deletion timestamp, set for deleted clients
    pub server_deleted_at: Option<String>,
}

/// A project
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Project {
    /// Project ID
    pub id: u64,
    /// Workspace ID
    pub workspace_id: u64,
    /// Client ID
    pub client_id: Option<u64>,
    /// Project name, unique for client and workspace
    pub name: String,
    /// Whether only project users can see the project
    pub is_private: bool,
    /// Whether the project is active (not archived)
    pub active: bool,
    /// Whether the project is billable
    pub billable: Option<bool>,
    /// Whether the project is a template
    pub template: Option<bool>,
    /// Whether estimated hours are computed from tasks
    pub auto_estimates: Option<bool>,
    /// Estimated hours
    pub estimated_hours: Option<i64>,
    /// Hex color
    pub color: Option<String>,
    /// Hourly rate
    pub rate: Option<f64>,
    /// Currency
    pub currency: Option<String>,
    /// Tracked hours
    pub actual_hours: Option<i64>,
    /// Last update timestamp
    pub at: Option<String>,
    /// Creation timestamp
    pub created_at: Option<String>,
    /// Deletion timestamp, set for deleted projects
    pub server_deleted_at: Option<String>,
}

/// A project task (pro workspaces only)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Task {
    /// Task ID
    pub id: u64,
    /// Task name, unique in the project
    pub name: String,
    /// Workspace ID
    pub workspace_id: u64,
    /// Project ID
    pub project_id: u64,
    /// Assigned user
    pub user_id: Option<u64>,
    /// Estimated duration in seconds
    pub estimated_seconds: Option<i64>,
    /// Tracked duration in seconds
    pub tracked_seconds: Option<i64>,
    /// Whether the task is not done yet
    pub active: bool,
    /// Last update timestamp
    pub at: Option<String>,
}

/// A tag
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct Tag {
    /// Tag ID
    pub id: u64,
    /// Workspace ID
    pub workspace_id: u64,
    /// Tag name, unique in the workspace
    pub name: String,
    /// Last update timestamp
    pub at: Option<String>,
}

/// A time entry
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TimeEntry {
    /// Time entry ID
    pub id: u64,
    /// Workspace ID
    pub workspace_id: u64,
    /// Project ID
    pub project_id: Option<u64>,
    /// Task ID
    pub task_id: Option<u64>,
    /// Owner
    pub user_id: Option<u64>,
    /// Billable flag
    pub billable: bool,
    /// Start, ISO-8601
    pub start: Option<String>,
    /// Stop, ISO-8601; missing while running
    pub stop: Option<String>,
    /// Duration in seconds; negative while running
    pub duration: i64,
    /// Description
    pub description: Option<String>,
    /// Tag names
    pub tags: Option<Vec<String>>,
    /// Tag IDs
    pub tag_ids: Option<Vec<u64>>,
    /// Hide start and stop times
    pub duronly: bool,
    /// Last update timestamp
    pub at: Option<String>,
    /// Deletion timestamp
    pub server_deleted_at: Option<String>,
}

impl TimeEntry {
    /// True while the entry is running
    pub fn is_running(&self) -> bool {
        self.duration < 0
    }
}

/// The authenticated user, optionally with related data
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct User {
    /// User ID
    pub id: u64,
    /// E-mail
    pub email: String,
    /// Full name
    pub fullname: String,
    /// Time zone name
    pub timezone: Option<String>,
    /// Default workspace
    pub default_workspace_id: Option<u64>,
    /// First day of the week, 0 = Sunday
    pub beginning_of_week: Option<u8>,
    /// Avatar URL
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: Option<String>,
    /// Last update timestamp
    pub at: Option<String>,
    /// Related clients
    pub clients: Option<Vec<WorkspaceClient>>,
    /// Related projects
    pub projects: Option<Vec<Project>>,
    /// Related tags
    pub tags: Option<Vec<Tag>>,
    /// Related tasks
    pub tasks: Option<Vec<Task>>,
    /// Related time entries
    pub time_entries: Option<Vec<TimeEntry>>,
    /// Related workspaces
    pub workspaces: Option<Vec<Workspace>>,
}

/// A user's membership in a workspace
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct WorkspaceUser {
    /// Membership ID
    pub id: u64,
    /// User ID
    pub user_id: u64,
    /// Workspace ID
    pub workspace_id: u64,
    /// Name
    pub name: Option<String>,
    /// E-mail
    pub email: Option<String>,
    /// Admin flag
    pub admin: bool,
    /// Active flag
    pub active: bool,
    /// Role name
    pub role: Option<String>,
}

/// A user's membership in a project
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProjectUser {
    /// Membership ID
    pub id: u64,
    /// Project ID
    pub project_id: u64,
    /// User ID
    pub user_id: u64,
    /// Workspace ID
    pub workspace_id: u64,
    /// Manager flag
    pub manager: bool,
    /// Hourly rate
    pub rate: Option<f64>,
}

/// Workspace dashboard
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dashboard {
    /// Recent activity of every user
    pub all_activity: Value,
    /// Most active user
    pub most_active_user: Value,
    /// Top activity
    pub activity: Value,
}

/// A failed item of a bulk update
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BulkFailure {
    /// Time entry ID
    pub id: u64,
    /// Reason
    pub message: String,
}

/// Result of a bulk time entry update
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BulkUpdateResponse {
    /// Updated time entry IDs
    pub success: Vec<u64>,
    /// Entries that could not be updated
    #[serde(default)]
    pub failure: Vec<BulkFailure>,
}

/// Response of a tag update on several time entries
///
/// Depending on the endpoint version Toggl answers with a bulk summary, the
/// updated entries, or a single entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TagsUpdateResponse {
    /// `{"success": [...], "failure": [...]}`
    Bulk(BulkUpdateResponse),
    /// List of updated entries
    Entries(Vec<TimeEntry>),
    /// A single updated entry
    Entry(TimeEntry),
}

impl TagsUpdateResponse {
    /// Updated entries, empty for a bulk summary
    pub fn entries(&self) -> Vec<&TimeEntry> {
        match self {
            Self::Bulk(_) => Vec::new(),
            Self::Entries(entries) => entries.iter().collect(),
            Self::Entry(entry) => vec![entry],
        }
    }
}

/// A client entry from the reports filters endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ReportClient {
    /// Client ID
    pub id: u64,
    /// Client name
    pub name: String,
}

/// A generated report
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// JSON report
    Json(Value),
    /// PDF, CSV or XLS document
    Document(Vec<u8>),
}

impl Report {
    /// Bytes written to disk: the document itself, or the JSON text
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::to_vec(value),
            Self::Document(bytes) => Ok(bytes.clone()),
        }
    }

    /// JSON payload, if this is a JSON report
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Document(_) => None,
        }
    }
}
