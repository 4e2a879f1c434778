//! Implementations of the service interfaces for [`Client`](crate::application::client::Client)

mod client_service;
mod dashboard_service;
mod project_service;
mod tag_service;
mod task_service;
mod time_entry_service;
mod user_service;
mod workspace_service;
