//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod parse;
pub mod show;
pub mod summary;

// Re-export main command functions
pub use models::{DumpInput, ShowArgs, SummaryArgs};
pub use parse::{execute_parse, load_dump};
pub use show::execute_show;
pub use summary::execute_summary;
