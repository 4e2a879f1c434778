/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Toggl Client Prelude
//!
//! Importing the prelude brings the clients, the service traits and the
//! request/response models into scope.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Credentials::token("my-token"))?;
//! let me = client.me(false).await?;
//! let workspaces = client.workspaces().await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration loaded from the environment
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENTS AND CREDENTIALS
// ============================================================================

/// Basic-auth credentials
pub use crate::application::auth::Credentials;

/// Toggl Track API client
pub use crate::application::client::Client;

/// Toggl Reports API client
pub use crate::application::reports::ReportsClient;

// ============================================================================
// SERVICE TRAITS
// ============================================================================

pub use crate::application::interfaces::{
    ClientService, DashboardService, ProjectService, TagService, TaskService, TimeEntryService,
    UserService, WorkspaceService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Connection and its options
pub use crate::model::http::{Connection, ConnectionOptions};

/// Retry policy for rate limited requests
pub use crate::model::retry::RetryConfig;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    ActiveFilter, ClientRequest, PatchOperation, ProjectRequest, ReportFormat, ReportKind,
    ReportRequest, TagAction, TagRequest, TagsUpdateRequest, TaskRequest, TimeEntryRequest,
};

/// Response models
pub use crate::model::responses::{
    BulkFailure, BulkUpdateResponse, Dashboard, Project, ProjectUser, Report, ReportClient, Tag,
    TagsUpdateResponse, Task, TimeEntry, User, Workspace, WorkspaceClient, WorkspaceUser,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validation and timestamp helpers
pub use crate::model::utils::{Timestamp, iso8601, require_params};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, NaiveDate, Utc};
pub use serde_json::{Value, json};
