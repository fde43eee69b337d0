//! Output format specification.

use std::fmt;

use clap::ValueEnum;

/// Output format for posterior reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable indented text, four decimal places.
    #[default]
    Text,
    /// Name-keyed JSON object at full precision.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
