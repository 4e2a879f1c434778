/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retrying rate limited (429) requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, first call included (None = 3)
    pub max_attempts: Option<u32>,
    /// Delay in milliseconds between attempts (None = 1000)
    pub retry_delay_ms: Option<u64>,
}

impl RetryConfig {
    /// Creates the default retry configuration: 3 attempts one second apart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a retry configuration from `TOGGL_MAX_RETRY_ATTEMPTS` and
    /// `TOGGL_RETRY_DELAY_MS`; unset or unparsable variables keep the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_attempts: get_env_or_none("TOGGL_MAX_RETRY_ATTEMPTS"),
            retry_delay_ms: get_env_or_none("TOGGL_RETRY_DELAY_MS"),
        }
    }

    /// Creates a retry configuration with a maximum number of attempts
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            retry_delay_ms: None,
        }
    }

    /// Creates a retry configuration with custom delay
    #[must_use]
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            max_attempts: None,
            retry_delay_ms: Some(delay_ms),
        }
    }

    /// Creates a retry configuration with both max attempts and custom delay
    #[must_use]
    pub fn with_max_attempts_and_delay(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            retry_delay_ms: Some(delay_ms),
        }
    }

    /// Gets the maximum number of attempts, never less than one
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS).max(1)
    }

    /// Gets the delay between attempts
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            retry_delay_ms: Some(DEFAULT_RETRY_DELAY_MS),
        }
    }
}
