//! Configuration and constants for parsing and reporting.

use clap::ValueEnum;
use serde::Serialize;

/// Keyword that opens every block header ("goroutine 1 [running]:")
pub const DEFAULT_HEADER_KEYWORD: &str = "goroutine";

/// Grouping key for routines captured without any frame
pub const EMPTY_STACK_KEY: &str = "<empty stack>";

/// Line the runtime prints when it truncates a deep stack
pub const ELIDED_FRAMES_MARKER: &str = "...additional frames elided...";

/// Routine ids printed per line in the detail report
pub const IDS_PER_LINE: usize = 50;

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// How two stacks are compared when detecting duplicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignaturePolicy {
    /// Every frame's function and location must match
    #[default]
    Exact,

    /// Only function names are compared; line shifts between builds are ignored
    #[value(name = "functions")]
    FunctionsOnly,
}

/// Options controlling a parse
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Header keyword, `goroutine` for Go dumps
    pub keyword: String,

    /// Duplicate-detection policy used by aggregation
    pub signature_policy: SignaturePolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_HEADER_KEYWORD.to_string(),
            signature_policy: SignaturePolicy::default(),
        }
    }
}

impl ParseOptions {
    pub fn with_signature_policy(mut self, policy: SignaturePolicy) -> Self {
        self.signature_policy = policy;
        self
    }
}
