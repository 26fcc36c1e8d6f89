//! Read-time ranked views over the aggregation indexes.
//!
//! Aggregation itself never reorders by frequency. Views that want
//! "most common first" sort here, stably, so ties keep encounter order.

use super::ordered_map::OrderedMap;
use super::signature::Signature;
use super::stats::{RoutineStats, Stats};
use crate::parser::schema::{Dump, Routine};
use crate::utils::config::{SignaturePolicy, SCHEMA_VERSION};
use chrono::Utc;
use log::debug;
use serde::Serialize;

/// Row of the function table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSummary {
    pub function: String,

    /// Routines with this function on top
    pub total: usize,

    /// Distinct stacks among them
    pub unique: usize,
}

/// One signature bucket of a function group
#[derive(Debug, Clone, Copy)]
pub struct SignatureGroup<'a> {
    pub signature: &'a Signature,

    /// Indexes into `Dump::routines`
    pub routines: &'a [usize],
}

impl SignatureGroup<'_> {
    pub fn occurrences(&self) -> usize {
        self.routines.len()
    }
}

/// Function groups, largest first
pub fn rank_functions(stats: &Stats) -> Vec<FunctionSummary> {
    let mut rows: Vec<FunctionSummary> = stats
        .by_function
        .iter()
        .map(|(function, group)| FunctionSummary {
            function: function.clone(),
            total: group.total(),
            unique: group.unique(),
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Signature buckets of one group, most frequent first
pub fn rank_signatures(group: &RoutineStats) -> Vec<SignatureGroup<'_>> {
    let mut buckets: Vec<SignatureGroup<'_>> = group
        .by_signature
        .iter()
        .map(|(signature, routines)| SignatureGroup {
            signature,
            routines: routines.as_slice(),
        })
        .collect();

    buckets.sort_by(|a, b| b.occurrences().cmp(&a.occurrences()));
    buckets
}

/// Routine count per base state ("chan receive", "select", ...)
pub fn count_by_state(routines: &[Routine]) -> OrderedMap<String, usize> {
    let mut counts = OrderedMap::new();
    for routine in routines {
        *counts.get_or_insert_with(routine.base_state().to_string(), || 0) += 1;
    }
    counts
}

/// Report-level overview of a dump
#[derive(Debug, Clone, Serialize)]
pub struct DumpSummary {
    /// Schema version for compatibility checking
    pub version: String,

    pub signature_policy: SignaturePolicy,
    pub total_routines: usize,
    pub distinct_functions: usize,
    pub unique_stacks: usize,
    pub warning_count: usize,

    /// Routine count per base state, in encounter order
    pub states: OrderedMap<String, usize>,

    /// Top function groups, largest first
    pub functions: Vec<FunctionSummary>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

/// Summarize a dump, keeping the `top_n` largest function groups
pub fn summarize(dump: &Dump, top_n: Option<usize>) -> DumpSummary {
    let stats = dump.stats();
    let mut functions = rank_functions(stats);
    if let Some(top_n) = top_n {
        functions.truncate(top_n);
    }

    debug!(
        "Summarized {} routines into {} function rows",
        dump.routines().len(),
        functions.len()
    );

    DumpSummary {
        version: SCHEMA_VERSION.to_string(),
        signature_policy: stats.policy,
        total_routines: dump.routines().len(),
        distinct_functions: stats.by_function.len(),
        unique_stacks: stats.unique_stacks(),
        warning_count: dump.warnings().len(),
        states: count_by_state(dump.routines()),
        functions,
        generated_at: Utc::now().to_rfc3339(),
    }
}
