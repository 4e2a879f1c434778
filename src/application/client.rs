/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Toggl Track API v9
//!
//! The client is a thin layer over [`Connection`]: each resource method
//! formats a path, sends a typed body and decodes the typed answer. The
//! resource methods live in the service traits of
//! [`interfaces`](crate::application::interfaces).
//!
//! # Example
//! ```ignore
//! use toggl_client::prelude::*;
//!
//! let client = Client::new(Credentials::token("my-token"))?;
//! let me = client.me(false).await?;
//! ```

use crate::application::auth::Credentials;
use crate::application::config::Config;
use crate::constants::TOGGL_API_V9_URL;
use crate::error::AppError;
use crate::model::http::{Connection, ConnectionOptions};
use std::sync::Arc;

/// Client for the Toggl Track API v9
#[derive(Debug, Clone)]
pub struct Client {
    connection: Arc<Connection>,
}

impl Client {
    /// Creates a client for the public API with default options
    pub fn new(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_options(credentials, TOGGL_API_V9_URL, ConnectionOptions::default())
    }

    /// Creates a client for `base_url` with explicit options
    pub fn with_options(
        credentials: Credentials,
        base_url: &str,
        options: ConnectionOptions,
    ) -> Result<Self, AppError> {
        let connection = Connection::open(credentials, Some(base_url), options)?;
        Ok(Self::from_connection(Arc::new(connection)))
    }

    /// Creates a client with explicit credentials and the URL, timeout,
    /// retry and logging settings of `config`
    pub fn with_config(credentials: Credentials, config: &Config) -> Result<Self, AppError> {
        Self::with_options(
            credentials,
            &config.rest_api.base_url,
            config.connection_options(),
        )
    }

    /// Creates a client entirely from `config`, resolving credentials from the
    /// token, the token file or `~/.toggl`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::with_config(config.credentials()?, config)
    }

    /// Creates a client sharing an existing connection
    pub fn from_connection(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}
