/// Credentials and token file resolution
pub mod auth;
/// Client for the Toggl Track API v9
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Client for the Toggl Reports API v3
pub mod reports;
mod services;
