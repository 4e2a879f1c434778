/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Connection with basic auth, retry on rate limit and response decoding
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for rate limited requests
pub mod retry;
/// Parameter validation, timestamp formatting and response decoding helpers
pub mod utils;
