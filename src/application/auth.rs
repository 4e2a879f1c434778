/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Credential resolution for the Toggl APIs
//!
//! Toggl accepts HTTP Basic authentication in two flavours:
//! - the API token as username together with the literal password `api_token`
//! - the account e-mail and password
//!
//! The token can be given directly or read from a file, by default `~/.toggl`.

use crate::constants::{API_TOKEN, TOGGL_FILE};
use crate::error::AppError;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Basic-auth credentials, immutable once a client is built
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API token sent as username, with `api_token` as password
    Token(String),
    /// Explicit username and password
    Basic {
        /// Account e-mail
        username: String,
        /// Account password
        password: String,
    },
}

impl Credentials {
    /// Credentials from an API token
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Credentials from a username and password pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username sent in the basic-auth header
    pub fn username(&self) -> &str {
        match self {
            Self::Token(token) => token,
            Self::Basic { username, .. } => username,
        }
    }

    /// Password sent in the basic-auth header
    pub fn password(&self) -> &str {
        match self {
            Self::Token(_) => API_TOKEN,
            Self::Basic { password, .. } => password,
        }
    }

    /// Path of the token file in the user's home directory
    pub fn default_token_file() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(TOGGL_FILE))
    }

    /// Reads an API token from `path`, surrounding whitespace removed
    pub fn from_token_file(path: &Path) -> Result<Self, AppError> {
        let token = std::fs::read_to_string(path)?.trim().to_string();
        if token.is_empty() {
            return Err(AppError::Config(format!(
                "api_token file {} is empty",
                path.display()
            )));
        }
        debug!("Read api_token from {}", path.display());
        Ok(Self::Token(token))
    }

    /// Resolves credentials from an explicit token or a token file.
    ///
    /// An explicit, non-empty `token` wins. Otherwise the token is read from
    /// `token_file`, or from `~/.toggl` when no file is given. When the file
    /// does not exist the error names every way to supply credentials.
    pub fn resolve(token: Option<&str>, token_file: Option<&Path>) -> Result<Self, AppError> {
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            return Ok(Self::Token(token.to_string()));
        }

        let path = match token_file {
            Some(path) => path.to_path_buf(),
            None => Self::default_token_file().unwrap_or_else(|| PathBuf::from(TOGGL_FILE)),
        };

        if !path.exists() {
            return Err(AppError::Config(missing_credentials_message(&path)));
        }
        Self::from_token_file(&path)
    }
}

fn missing_credentials_message(path: &Path) -> String {
    format!(
        "Expecting one of:\n 1) api_token in file {}, or\n 2) parameter: (api_token), or\n 3) parameters: (username, password).",
        path.display()
    )
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
