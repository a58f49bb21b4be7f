//! Application module
//!
//! This module contains application-level functionality for the binary:
//! - Configuration and settings file handling
//! - Logging setup
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;

pub use config::{AppConfig, PadSettings, Settings};
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
