//! CLI command handlers
//!
//! This module contains all CLI-related functionality:
//! - Argument parsing structures
//! - Input reading and rename parsing
//! - Command routing

pub mod args;
pub mod input;
pub mod router;

pub use args::{Cli, Commands};
pub use router::execute_command;
