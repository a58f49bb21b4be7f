//! Input parsing for CLI commands

use crate::error::{ShapeError, ShapeResult};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a JSON document from a file, or from stdin when no path is given
pub fn read_json(path: Option<&Path>) -> ShapeResult<Value> {
    let content = match path {
        Some(path) => {
            debug!("Reading JSON from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| ShapeError::io(path, e))?
        }
        None => {
            debug!("Reading JSON from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ShapeError::io("<stdin>", e))?;
            buffer
        }
    };

    Ok(serde_json::from_str(&content)?)
}

/// Parse `OLD=NEW` pairs into a rename table
///
/// Both sides must be non-empty. A repeated `OLD` keeps its last mapping.
pub fn parse_renames(pairs: &[String]) -> ShapeResult<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((old, new)) if !old.is_empty() && !new.is_empty() => {
                Ok((old.to_string(), new.to_string()))
            }
            _ => Err(ShapeError::InvalidRename(pair.clone())),
        })
        .collect()
}
