//! Command routing and execution
//!
//! This module routes parsed CLI commands to the library functions and
//! writes their results to the given output.

use crate::app::Settings;
use crate::cli::args::Commands;
use crate::cli::input::{parse_renames, read_json};
use crate::error::ShapeError;
use crate::format::{format_number_value, pad, pad_right};
use crate::kind::type_of;
use crate::object::{map_key_value, purify_value};
use crate::text::convert;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Execute a CLI command, writing its output to `out`
pub fn execute_command<W: Write>(
    command: Commands,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Case { case, text } => {
            for item in &text {
                writeln!(out, "{}", convert(case, item))?;
            }
        }
        Commands::FormatNumber {
            value,
            decimals,
            empty,
            prefix,
        } => {
            let mut format = settings.number.clone();
            if let Some(decimals) = decimals {
                format = format.with_decimals(decimals);
            }
            if let Some(empty) = empty {
                format = format.with_empty_value(empty);
            }
            if let Some(prefix) = prefix {
                format = format.with_prefix(prefix);
            }
            debug!("Formatting '{}' with {:?}", value, format);
            writeln!(out, "{}", format_number_value(&Value::String(value), &format))?;
        }
        Commands::Pad {
            text,
            width,
            fill,
            right,
        } => {
            let fill = fill.unwrap_or(settings.pad.fill);
            let padded = if right {
                pad_right(&text, fill, width)
            } else {
                pad(&text, fill, width)
            };
            writeln!(out, "{}", padded)?;
        }
        Commands::Purify {
            input,
            defaults,
            deep,
        } => {
            let value = read_json(input.as_deref()).context("Failed to read input object")?;
            let defaults = defaults
                .as_deref()
                .map(|path| read_json(Some(path)))
                .transpose()
                .context("Failed to read defaults object")?;
            let purified = purify_value(&value, defaults.as_ref(), deep)?;
            write_json(out, &purified)?;
        }
        Commands::RenameKeys { input, renames } => {
            let renames = parse_renames(&renames)?;
            let value = read_json(input.as_deref()).context("Failed to read input object")?;
            write_json(out, &map_key_value(&value, &renames)?)?;
        }
        Commands::TypeOf { json } => {
            let value: Value = serde_json::from_str(&json).map_err(ShapeError::from)?;
            writeln!(out, "{}", type_of(&value))?;
        }
    }

    Ok(())
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(ShapeError::from)?;
    writeln!(out)?;
    Ok(())
}
