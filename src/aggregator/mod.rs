//! Aggregation of parsed routines into grouping indexes.
//!
//! This module transforms the parsed routine list into:
//! - An insertion-ordered index by top-of-stack function
//! - Per-function buckets of stack-identical routines
//! - Ranked views for reporting (largest groups, most common stacks)

pub mod metrics;
pub mod ordered_map;
pub mod signature;
pub mod stats;

// Re-export main types and functions
pub use metrics::{rank_functions, rank_signatures, summarize, DumpSummary, FunctionSummary, SignatureGroup};
pub use ordered_map::OrderedMap;
pub use signature::Signature;
pub use stats::{aggregate, RoutineStats, Stats};
