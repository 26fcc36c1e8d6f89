//! Aggregation of parsed routines into grouping indexes.
//!
//! Routines are grouped by top-of-stack function, in the order each
//! function is first met, and within a group by exact stack signature.
//! Indexes store positions into the dump's routine list, never copies.

use super::ordered_map::OrderedMap;
use super::signature::Signature;
use crate::parser::schema::Routine;
use crate::utils::config::{SignaturePolicy, EMPTY_STACK_KEY};
use log::debug;

/// Routines sharing one top-of-stack function
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineStats {
    pub function_name: String,

    /// Indexes into `Dump::routines`, in encounter order
    pub routines: Vec<usize>,

    /// Routine indexes bucketed by stack signature
    pub by_signature: OrderedMap<Signature, Vec<usize>>,
}

impl RoutineStats {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            routines: Vec::new(),
            by_signature: OrderedMap::new(),
        }
    }

    /// Number of routines in the group
    pub fn total(&self) -> usize {
        self.routines.len()
    }

    /// Number of distinct stacks in the group
    pub fn unique(&self) -> usize {
        self.by_signature.len()
    }

    fn add(&mut self, index: usize, signature: Signature) {
        self.routines.push(index);
        self.by_signature
            .get_or_insert_with(signature, Vec::new)
            .push(index);
    }
}

/// Top-level aggregation result
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Groups in first-encounter order of their function
    pub by_function: OrderedMap<String, RoutineStats>,

    /// Policy the signatures were computed with
    pub policy: SignaturePolicy,
}

impl Stats {
    pub fn function(&self, name: &str) -> Option<&RoutineStats> {
        self.by_function.get(name)
    }

    /// Sum of all group sizes
    pub fn total_routines(&self) -> usize {
        self.by_function.values().map(RoutineStats::total).sum()
    }

    /// Distinct stacks across all groups
    pub fn unique_stacks(&self) -> usize {
        self.by_function.values().map(RoutineStats::unique).sum()
    }
}

/// Key a routine is grouped under
pub fn group_key(routine: &Routine) -> &str {
    routine.top_function().unwrap_or(EMPTY_STACK_KEY)
}

/// Build the grouping indexes over `routines`
///
/// Deterministic: the same routine sequence always yields the same group
/// order and bucket contents.
pub fn aggregate(routines: &[Routine], policy: SignaturePolicy) -> Stats {
    debug!("Aggregating {} routines", routines.len());

    let mut by_function: OrderedMap<String, RoutineStats> = OrderedMap::new();

    for (index, routine) in routines.iter().enumerate() {
        let key = group_key(routine);
        let signature = Signature::of(routine, policy);

        by_function
            .get_or_insert_with(key.to_string(), || RoutineStats::new(key))
            .add(index, signature);
    }

    debug!("Aggregated into {} function groups", by_function.len());

    Stats {
        by_function,
        policy,
    }
}
