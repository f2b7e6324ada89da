//! Output formatting for merged blocks.
//!
//! - [`csv`] - quoted, aligned CSV rows
//! - [`terminal`] - coloured summary line for stderr

mod csv;
mod terminal;

use crate::models::NetworkBlock;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

pub use csv::{quoted_field, render_csv};
pub use terminal::summary_line;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One CIDR per line.
    #[default]
    Plain,
    /// JSON array of CIDR strings.
    Json,
    /// CSV with network and broadcast columns.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s.trim(), true)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render `blocks` in the requested format, newline terminated.
pub fn render(blocks: &[NetworkBlock], format: OutputFormat) -> Result<String, serde_json::Error> {
    let text: String = match format {
        OutputFormat::Plain => blocks.iter().map(|b| format!("{b}\n")).collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(blocks)?),
        OutputFormat::Csv => render_csv(blocks),
    };
    Ok(text)
}
