/// Root of the Toggl Track API
pub const TOGGL_API_URL: &str = "https://api.track.toggl.com/api/";
/// Base URL of the Toggl Track API v9
pub const TOGGL_API_V9_URL: &str = "https://api.track.toggl.com/api/v9/";
/// Root of the Toggl Reports API
pub const TOGGL_REPORTS_URL: &str = "https://api.track.toggl.com/reports/api/";
/// Base URL of the Toggl Reports API v3
pub const REPORTS_V3_URL: &str = "https://api.track.toggl.com/reports/api/v3/";
/// Password sent together with an API token used as basic-auth username
pub const API_TOKEN: &str = "api_token";
/// Default name of the file in the home directory holding the API token
pub const TOGGL_FILE: &str = ".toggl";
/// Delay in milliseconds between two attempts of a rate limited request
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
/// Maximum number of attempts (first call included) for a rate limited request
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Number of days `get_time_entries` looks back when no start date is given
pub const TIME_ENTRIES_DAYS_BACK: i64 = 9;
/// Number of days a report looks back when no start date is given
pub const REPORT_DAYS_BACK: i64 = 6;
/// User agent string used in HTTP requests and as `created_with` for time entries
pub const USER_AGENT: &str = concat!("toggl-client/", env!("CARGO_PKG_VERSION"));
