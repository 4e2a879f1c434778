/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Connection to a Toggl REST endpoint
//!
//! Every outbound request goes through [`make_http_request`], which applies
//! basic authentication, retries rate limited (429) responses and turns the
//! final response into either a [`Response`] or an [`AppError`].

use crate::application::auth::Credentials;
use crate::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Empty query parameter list for `get`
pub const NO_QUERY: &[(&str, &str)] = &[];

/// Options accepted by [`Connection::open`]
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    /// Log every request line, body and response status at debug level
    pub log: bool,
    /// Transport timeout in seconds (0 disables it)
    pub timeout_secs: u64,
    /// Retry policy for rate limited requests
    pub retry: RetryConfig,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            log: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetryConfig::default(),
        }
    }
}

impl ConnectionOptions {
    /// Enables or disables verbose request logging
    #[must_use]
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Replaces the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the transport timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// HTTP connection bound to one base URL and one set of credentials
///
/// The connection holds no mutable state, so a single instance can be shared
/// between tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Connection {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
    options: ConnectionOptions,
}

impl Connection {
    /// Opens a connection to `base_url`
    ///
    /// # Arguments
    /// * `credentials` - Basic-auth credentials sent with every request
    /// * `base_url` - Root of the REST endpoint; required
    /// * `options` - Logging, timeout and retry options
    ///
    /// # Returns
    /// * `Ok(Connection)` - Ready to use; every request carries
    ///   `Content-Type: application/json` and certificates are verified
    /// * `Err(AppError::Config)` - If `base_url` is missing or blank
    pub fn open(
        credentials: Credentials,
        base_url: Option<&str>,
        options: ConnectionOptions,
    ) -> Result<Self, AppError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::Config("Missing URL".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if options.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout_secs));
        }

        if options.log {
            debug!("Opening connection to {}", base_url);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.to_string(),
            credentials,
            options,
        })
    }

    /// Base URL this connection is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Options the connection was opened with
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// Makes a GET request
    ///
    /// `query` entries are appended as `key=value` pairs. A `data` envelope is
    /// unwrapped, and a body that is not JSON comes back as a string value.
    pub async fn get<K: Display, V: Display>(
        &self,
        path: &str,
        query: &[(K, V)],
    ) -> Result<Value, AppError> {
        let path = build_path(path, query);
        let response = self.send(Method::GET, &path, None).await?;
        let text = response.text().await?;
        if is_empty_body(text.as_bytes()) {
            return Ok(empty_object());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(mut map)) if map.contains_key("data") => {
                Ok(map.remove("data").unwrap_or(Value::Null))
            }
            Ok(value) => Ok(value),
            Err(e) => {
                debug!("GET {} returned a non JSON body: {}", path, e);
                Ok(Value::String(text))
            }
        }
    }

    /// Makes a POST request and decodes the JSON response
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let response = self.send(Method::POST, path, Some(encode_body(body)?)).await?;
        decode_json(response).await
    }

    /// Makes a POST request and returns the response body untouched
    ///
    /// Used for report documents (PDF, CSV, XLS). An empty or `null` body
    /// comes back as the bytes of `{}`.
    pub async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, AppError> {
        let response = self.send(Method::POST, path, Some(encode_body(body)?)).await?;
        let bytes = response.bytes().await?;
        if is_empty_body(&bytes) {
            return Ok(serde_json::to_vec(&empty_object())?);
        }
        Ok(bytes.to_vec())
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let response = self.send(Method::PUT, path, Some(encode_body(body)?)).await?;
        decode_json(response).await
    }

    /// Makes a PATCH request
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let response = self.send(Method::PATCH, path, Some(encode_body(body)?)).await?;
        decode_json(response).await
    }

    /// Makes a DELETE request
    ///
    /// The body is not parsed: it comes back as a string value, or as `{}`
    /// when the server sends nothing.
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        let response = self.send(Method::DELETE, path, None).await?;
        let text = response.text().await?;
        if is_empty_body(text.as_bytes()) {
            return Ok(empty_object());
        }
        Ok(Value::String(text))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, AppError> {
        let url = if path.starts_with("http") {
            encode_plus(path)
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                encode_plus(path.trim_start_matches('/'))
            )
        };

        make_http_request(
            &self.http_client,
            method,
            &url,
            &self.credentials,
            body.as_deref(),
            self.options.retry,
            self.options.log,
        )
        .await
    }
}

/// Makes an HTTP request with basic authentication and retry on rate limit
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL, already encoded
/// * `credentials` - Basic-auth credentials
/// * `body` - Optional JSON body
/// * `retry_config` - Maximum attempts and delay between them
/// * `log` - Log request and response lines
///
/// # Returns
///
/// * `Ok(Response)` - The final response had a 2xx status and no `warning` header
/// * `Err(AppError::ServerWarning)` - The final response carried a `warning` header
/// * `Err(AppError::RateLimitExceeded)` - Every attempt answered 429
/// * `Err(AppError::Http)` - Any other non-2xx status
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    credentials: &Credentials,
    body: Option<&str>,
    retry_config: RetryConfig,
    log: bool,
) -> Result<Response, AppError> {
    let max_attempts = retry_config.max_attempts();
    let mut attempts = 0;

    let response = loop {
        attempts += 1;

        if log {
            match body {
                Some(b) => debug!("{} {} / {}", method, url, b),
                None => debug!("{} {}", method, url),
            }
        }

        let mut request = client
            .request(method.clone(), url)
            .basic_auth(credentials.username(), Some(credentials.password()));
        if let Some(b) = body {
            request = request.body(b.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        if log {
            debug!("Response status: {} (attempt {})", status, attempts);
        }

        if status != StatusCode::TOO_MANY_REQUESTS || attempts >= max_attempts {
            break response;
        }

        warn!(
            "Rate limited on {} {} (attempt {}/{}), waiting {:?} before retry",
            method,
            url,
            attempts,
            max_attempts,
            retry_config.delay()
        );
        tokio::time::sleep(retry_config.delay()).await;
    };

    if let Some(warning) = response.headers().get("warning") {
        let message = String::from_utf8_lossy(warning.as_bytes()).into_owned();
        error!("{} {} returned a warning: {}", method, url, message);
        return Err(AppError::ServerWarning(message));
    }

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    error!("{} {} failed with status {}", method, url, status);
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AppError::RateLimitExceeded { attempts });
    }
    Err(AppError::Http { status })
}

/// Appends `key=value` query pairs to `path` and encodes `+` as `%2B`
///
/// Values are not otherwise URL-encoded.
pub fn build_path<K: Display, V: Display>(path: &str, query: &[(K, V)]) -> String {
    let query_string = query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    if query_string.is_empty() {
        encode_plus(path)
    } else {
        encode_plus(&format!("{path}?{query_string}"))
    }
}

/// Percent-encodes every literal `+` so the server does not read it as a space
pub fn encode_plus(path: &str) -> String {
    path.replace('+', "%2B")
}

/// An empty body and the literal `null` both mean "nothing"
pub fn is_empty_body(body: &[u8]) -> bool {
    let body = body.trim_ascii();
    body.is_empty() || body == b"null"
}

/// The `{}` value returned for empty responses
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
    Ok(serde_json::to_string(body)?)
}

async fn decode_json(response: Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    if is_empty_body(&bytes) {
        return Ok(empty_object());
    }
    Ok(serde_json::from_slice(&bytes)?)
}
