//! Error handling utilities
//!
//! This module provides centralized error handling for the binary.

use crate::error::ShapeError;
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `ShapeError`: shows the user message and uses its exit code
/// - For other errors: shows the error message and exits with 1
///
/// With `verbose >= 1` the full error chain is printed as well.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = match error.downcast_ref::<ShapeError>() {
        Some(shape_err) => {
            eprintln!("Error: {}", shape_err.user_message());
            shape_err.exit_code()
        }
        None => {
            eprintln!("Error: {error}");
            1
        }
    };

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}
