/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Parses a level name (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`), case insensitive.
/// Anything else maps to `INFO`.
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs a global `tracing` subscriber writing to stdout.
///
/// The level comes from the `LOGLEVEL` environment variable (default `INFO`).
/// The library never calls this itself; applications and tests opt in.
/// Calling it more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string()));
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // another subscriber was installed by the host application
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}
