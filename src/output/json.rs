//! JSON rendering of dump summaries.
//!
//! Summaries are printed for scripting, never written to disk.

use crate::aggregator::metrics::DumpSummary;
use crate::utils::error::OutputError;

/// Serialize a summary as pretty-printed JSON
pub fn summary_to_string(summary: &DumpSummary) -> Result<String, OutputError> {
    serde_json::to_string_pretty(summary).map_err(OutputError::SerializationFailed)
}
