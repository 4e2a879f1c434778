/// Environment variable helpers used by the configuration layer
pub mod config;
/// Logging setup based on `tracing-subscriber`
pub mod logger;

pub use config::*;
pub use logger::*;
