//! Summary command: function table or JSON overview.

use super::models::SummaryArgs;
use super::parse::load_dump;
use crate::aggregator::summarize;
use crate::output::{render_summary, summary_to_string};
use anyhow::{Context, Result};
use log::debug;

/// Execute the summary command
pub fn execute_summary(args: SummaryArgs) -> Result<()> {
    let dump = load_dump(&args.input)?;
    let summary = summarize(&dump, args.top);

    debug!("Rendering summary ({})", if args.json { "json" } else { "text" });

    if args.json {
        let json = summary_to_string(&summary).context("Failed to render JSON summary")?;
        println!("{}", json);
    } else {
        print!("{}", render_summary(&summary));
    }

    Ok(())
}
