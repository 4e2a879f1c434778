/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by the connection layer and every resource method.

use reqwest::StatusCode;

/// Errors returned by the Toggl client
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing base URL, missing credential source or missing workspace id
    #[error("configuration error: {0}")]
    Config(String),

    /// Required request fields are missing; the message lists every one of them
    #[error("{0}")]
    Validation(String),

    /// The server kept answering 429 until the attempt limit was reached
    #[error("HTTP Status: 429")]
    RateLimitExceeded {
        /// Number of attempts made
        attempts: u32,
    },

    /// The server attached a `warning` header to the response
    #[error("{0}")]
    ServerWarning(String),

    /// Any other non-2xx response
    #[error("HTTP Status: {}", .status.as_u16())]
    Http {
        /// Final status code
        status: StatusCode,
    },

    /// A value of the wrong kind was given, e.g. a number as timestamp
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// A string could not be parsed, e.g. a malformed timestamp
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// An argument is not supported
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code of the final response, if the error came from one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status } => Some(*status),
            Self::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            _ => None,
        }
    }

    /// Check if this is a rate-limit (429) error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded { .. })
            || matches!(self, Self::Http { status } if *status == StatusCode::TOO_MANY_REQUESTS)
    }

    /// Check if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
