//! Plain-text reports: the function table and per-function detail.

use crate::aggregator::metrics::{rank_signatures, DumpSummary};
use crate::parser::schema::Dump;
use crate::utils::config::IDS_PER_LINE;
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 116;

/// Render the function table of a summary
///
/// ```text
///  Total  Unique  Function
///     12       2  runtime.gopark(...)
/// ```
pub fn render_summary(summary: &DumpSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} goroutines, {} functions, {} unique stacks, {} warnings",
        summary.total_routines,
        summary.distinct_functions,
        summary.unique_stacks,
        summary.warning_count
    );

    if !summary.states.is_empty() {
        let states: Vec<String> = summary
            .states
            .iter()
            .map(|(state, count)| format!("{}: {}", state, count))
            .collect();
        let _ = writeln!(out, "States: {}", states.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>7}  {:>6}  Function", "Total", "Unique");
    for row in &summary.functions {
        let _ = writeln!(out, "{:>7}  {:>6}  {}", row.total, row.unique, row.function);
    }

    out
}

/// Render every distinct stack under `function`, most frequent first
///
/// Returns `None` if no routine has `function` on top of its stack.
pub fn render_function_detail(dump: &Dump, function: &str) -> Option<String> {
    let group = dump.function_stats(function)?;
    let mut out = String::new();

    for bucket in rank_signatures(group) {
        let _ = writeln!(out, "Signature: {}", bucket.signature);
        let _ = writeln!(out, "Occurrences: {}", bucket.occurrences());
        let _ = writeln!(out);

        let mut routines = dump.resolve(bucket.routines);
        if let Some(first) = routines.next() {
            let _ = writeln!(out, "{}", first.raw);
        }

        let ids: Vec<String> = dump
            .resolve(bucket.routines)
            .map(|routine| routine.id.to_string())
            .collect();
        let _ = writeln!(out, "goroutine ids: {}", format_ids(&ids));

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
        let _ = writeln!(out);
    }

    Some(out)
}

/// Comma-separated ids, wrapped every `IDS_PER_LINE`
fn format_ids(ids: &[String]) -> String {
    ids.chunks(IDS_PER_LINE)
        .map(|chunk| chunk.join(","))
        .collect::<Vec<_>>()
        .join(",\n")
}
