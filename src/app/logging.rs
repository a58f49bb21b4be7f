//! Logging configuration and initialization
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use crate::app::config::AppConfig;
use tracing::debug;

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    let log_level = config.log_level();

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(config.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("shapekit started with verbosity level: {}", config.verbose);
}
