//! Utility modules for configuration, error handling, and diagnostics.

pub mod config;
pub mod diagnostics;
pub mod error;

// Re-export commonly used types for convenience
pub use config::{ParseOptions, SignaturePolicy};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::{DumpError, OutputError, WarningKind};
