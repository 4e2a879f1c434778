use crate::application::auth::Credentials;
use crate::constants::{DEFAULT_TIMEOUT_SECS, REPORTS_V3_URL, TOGGL_API_V9_URL};
use crate::error::AppError;
use crate::model::http::ConnectionOptions;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_string};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Toggl clients
pub struct Config {
    /// API token; never serialized
    #[serde(skip_serializing, default)]
    pub api_token: Option<String>,
    /// File holding the API token (default `~/.toggl`)
    pub token_file: Option<PathBuf>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry policy for rate limited requests
    pub retry: RetryConfig,
    /// Verbose request logging
    pub log: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST endpoints
pub struct RestApiConfig {
    /// Base URL of the Toggl Track API
    pub base_url: String,
    /// Base URL of the Toggl Reports API
    pub reports_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: TOGGL_API_V9_URL.to_string(),
            reports_url: REPORTS_V3_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// Recognised variables:
    /// `TOGGL_API_TOKEN`, `TOGGL_API_FILE`, `TOGGL_API_URL`, `TOGGL_REPORTS_URL`,
    /// `TOGGL_TIMEOUT_SECS`, `TOGGL_LOG`, `TOGGL_MAX_RETRY_ATTEMPTS`, `TOGGL_RETRY_DELAY_MS`
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            api_token: get_env_string("TOGGL_API_TOKEN"),
            token_file: get_env_string("TOGGL_API_FILE").map(PathBuf::from),
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TOGGL_API_URL", TOGGL_API_V9_URL.to_string()),
                reports_url: get_env_or_default("TOGGL_REPORTS_URL", REPORTS_V3_URL.to_string()),
                timeout: get_env_or_default("TOGGL_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            },
            retry: RetryConfig::from_env(),
            log: get_env_flag("TOGGL_LOG", false),
        }
    }

    /// Resolves credentials from `api_token`, then `token_file`, then `~/.toggl`
    pub fn credentials(&self) -> Result<Credentials, AppError> {
        Credentials::resolve(self.api_token.as_deref(), self.token_file.as_deref())
    }

    /// Options used to open a connection
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            log: self.log,
            timeout_secs: self.rest_api.timeout,
            retry: self.retry,
        }
    }
}
