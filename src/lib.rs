/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Toggl Client
//!
//! A Rust client for the Toggl Track API v9 and the Toggl Reports API v3.
//!
//! Every resource call goes through a single [`Connection`](model::http::Connection)
//! that owns the HTTP client, the basic-auth credentials, the retry policy for
//! rate-limited (429) responses and the translation of failures into [`AppError`](error::AppError).
//!
//! ## Example
//! ```ignore
//! use toggl_client::prelude::*;
//!
//! let credentials = Credentials::resolve(None, None)?;
//! let client = Client::new(credentials)?;
//!
//! let workspaces = client.workspaces().await?;
//! let projects = client.projects(workspaces[0].id, None).await?;
//! ```
//!
//! ## Reports
//! ```ignore
//! use toggl_client::prelude::*;
//!
//! let mut reports = ReportsClient::new(Credentials::token("my-token"))?;
//! reports.set_workspace_id(1234567);
//! reports.write_summary("summary.pdf", &ReportRequest::default()).await?;
//! ```

/// Toggl API client, credentials, configuration and reports
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type for the library
pub mod error;
/// Connection, retry policy and request/response models
pub mod model;
/// Commonly used types
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
