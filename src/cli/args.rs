//! CLI argument structures
//!
//! This module defines the command-line interface used by the `shapekit`
//! binary: the top-level parser and one subcommand per transformation.

use crate::text::Case;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reshape JSON objects, convert identifier case and format numbers
#[derive(Parser)]
#[command(name = "shapekit")]
#[command(about = "shapekit - Reshape JSON objects, convert identifier case and format numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (TOML) with number and padding defaults
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert text between identifier cases
    Case {
        /// Conversion to apply
        #[arg(value_enum)]
        case: Case,

        /// Text to convert, one result line per argument
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Format a number with comma grouping and fixed decimals
    FormatNumber {
        /// Number to format; anything unparseable prints the empty value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Digits after the decimal point
        #[arg(short, long)]
        decimals: Option<usize>,

        /// Text printed for missing or non-numeric input
        #[arg(long, value_name = "TEXT")]
        empty: Option<String>,

        /// Text placed before the result, e.g. a currency symbol
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Pad text to a fixed width
    Pad {
        /// Text to pad
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Target width in characters
        #[arg(short, long)]
        width: usize,

        /// Fill character
        #[arg(short, long)]
        fill: Option<char>,

        /// Pad on the right instead of the left
        #[arg(long)]
        right: bool,
    },

    /// Remove null, empty-string and default-valued keys from a JSON object
    Purify {
        /// JSON file to read (defaults to stdin)
        input: Option<PathBuf>,

        /// JSON object of default values to strip
        #[arg(long, value_name = "FILE")]
        defaults: Option<PathBuf>,

        /// Purify nested objects as well
        #[arg(long)]
        deep: bool,
    },

    /// Rename keys of a JSON object
    RenameKeys {
        /// JSON file to read (defaults to stdin)
        input: Option<PathBuf>,

        /// Key rename, repeatable
        #[arg(short, long = "rename", value_name = "OLD=NEW", required = true)]
        renames: Vec<String>,
    },

    /// Print the type tag of a JSON value
    TypeOf {
        /// JSON literal, e.g. '[1, 2]' or 'null'
        #[arg(allow_hyphen_values = true)]
        json: String,
    },
}
