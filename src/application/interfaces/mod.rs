/// Client (customer) service interface
pub mod client;
/// Dashboard service interface
pub mod dashboard;
/// Project service interface
pub mod project;
/// Tag service interface
pub mod tag;
/// Task service interface
pub mod task;
/// Time entry service interface
pub mod time_entry;
/// Current user service interface
pub mod user;
/// Workspace service interface
pub mod workspace;

pub use client::ClientService;
pub use dashboard::DashboardService;
pub use project::ProjectService;
pub use tag::TagService;
pub use task::TaskService;
pub use time_entry::TimeEntryService;
pub use user::UserService;
pub use workspace::WorkspaceService;
