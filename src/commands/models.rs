use crate::utils::config::{ParseOptions, SignaturePolicy};
use std::path::PathBuf;

/// Input shared by every command
#[derive(Debug, Clone)]
pub struct DumpInput {
    /// Dump file to parse
    pub path: PathBuf,

    /// Duplicate-detection policy
    pub signature_policy: SignaturePolicy,
}

impl DumpInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            signature_policy: SignaturePolicy::default(),
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_signature_policy(self.signature_policy)
    }
}

/// Arguments for the summary command
#[derive(Debug, Clone)]
pub struct SummaryArgs {
    pub input: DumpInput,

    /// Number of function rows to print (None = all)
    pub top: Option<usize>,

    /// Print JSON instead of a table
    pub json: bool,
}

/// Arguments for the show command
#[derive(Debug, Clone)]
pub struct ShowArgs {
    pub input: DumpInput,

    /// Top-of-stack function to detail
    pub function: String,
}
