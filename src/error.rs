use crate::kind::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the fallible edges of the toolkit
///
/// The pure transformations never fail. These variants cover parsing input,
/// reading files and calling the `Value`-level entry points with the wrong
/// shape of value.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Expected a JSON object, found {kind}")]
    NotAnObject { kind: ValueKind },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid rename '{0}', expected OLD=NEW")]
    InvalidRename(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

impl ShapeError {
    /// Create an IO error bound to the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRename(_) | Self::Config(_) | Self::Toml(_) => 2,
            Self::NotAnObject { .. } | Self::InvalidJson(_) | Self::Io { .. } => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAnObject { kind } => {
                format!("Input must be a JSON object (got {})", kind)
            }
            Self::InvalidJson(e) => format!("Could not parse input as JSON: {}", e),
            Self::Io { path, source } => {
                format!("Could not read {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}
