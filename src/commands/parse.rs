//! Parse command: load a dump and report what was found.

use super::models::DumpInput;
use crate::parser::{Dump, DumpParser};
use crate::utils::diagnostics::LogSink;
use anyhow::{Context, Result};
use log::{info, warn};

/// Parse the input file, surfacing warnings through the log
pub fn load_dump(input: &DumpInput) -> Result<Dump> {
    let sink = LogSink;
    DumpParser::new(input.parse_options())
        .with_sink(&sink)
        .parse_file(&input.path)
        .with_context(|| format!("error parsing file [{}]", input.path.display()))
}

/// Execute the parse command
pub fn execute_parse(input: DumpInput) -> Result<()> {
    let dump = load_dump(&input)?;

    info!("parsed {} goroutines", dump.routines().len());
    info!(
        "{} distinct top-of-stack functions, {} unique stacks",
        dump.stats().by_function.len(),
        dump.stats().unique_stacks()
    );

    if dump.has_warnings() {
        warn!("parsed with {} warning(s)", dump.warnings().len());
    }

    Ok(())
}
