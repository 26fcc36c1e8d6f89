//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Parsing distinguishes two classes of problems:
//! - fatal errors (`DumpError`) that prevent producing any usable dump
//! - recoverable issues (`WarningKind`) that are recorded on the dump and never abort parsing

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a dump from being produced at all
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("no goroutine block found in input")]
    EmptyInput,

    #[error("failed to read dump file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while rendering reports
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Recoverable parse issues, attached to the dump as warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Header matched the block pattern but the id was missing or not numeric
    MalformedHeader,

    /// A frame had no `path:line` location line after it
    MissingLocation,

    /// Text before the first header
    UnexpectedPreamble,

    /// Stray text between blocks, or a location line with no function line
    UnexpectedLine,

    /// A header with no frames under it
    EmptyStack,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedHeader => "malformed header",
            Self::MissingLocation => "missing location",
            Self::UnexpectedPreamble => "unexpected preamble",
            Self::UnexpectedLine => "unexpected line",
            Self::EmptyStack => "empty stack",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
