//! Error handling for dispatch export loading.
//!
//! Statistics themselves never fail: malformed records are skipped where they
//! are read. Errors only arise while opening the export, reading rows, or
//! resolving the column layout.

use std::io;
use std::path::PathBuf;

pub mod util;

/// Problems with the column layout of an export
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// One or more required columns were not found in the header
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The header has fewer columns than the positional layout needs
    #[error("header has {found} columns, layout expects at least {expected}")]
    TooFewColumns { expected: usize, found: usize },

    /// A positional column does not carry the expected name
    #[error("column {index} is named '{found}', expected '{expected}'")]
    UnexpectedColumn {
        index: usize,
        expected: String,
        found: String,
    },

    /// The export has no header row at all
    #[error("export is empty, no header row found")]
    EmptyExport,
}

/// Specialized error type for loading and configuring statistics runs
#[derive(Debug, thiserror::Error)]
pub enum EmsStatsError {
    /// Error opening or reading a file
    #[error("IO error on {}: {context}", .path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: Option<io::Error>,
    },

    /// Error decoding the semicolon-delimited export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The export does not match the configured column layout
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Error writing the report as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid statistics configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl EmsStatsError {
    /// Create an IO error for a path without an underlying source
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source: None,
        }
    }

    /// Create an IO error for a path wrapping the original error
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        context: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source: Some(source),
        }
    }
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, EmsStatsError>;
