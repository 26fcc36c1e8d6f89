//! Typed model of a parsed goroutine dump.
//!
//! A `Dump` owns every `Routine`; the aggregation indexes in `Stats`
//! refer to routines by their position in `Dump::routines`.

use crate::aggregator::stats::{aggregate, RoutineStats, Stats};
use crate::utils::config::SignaturePolicy;
use crate::utils::error::WarningKind;
use serde::Serialize;
use std::fmt;

/// Source position of a frame ("/app/main.go:42")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One call site within a routine's stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Call expression as printed, arguments included
    pub function: String,

    /// Where the call is, when the dump says
    pub location: Option<Location>,

    /// `+0x..` program counter offset following the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl Frame {
    pub fn new(function: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            function: function.into(),
            location,
            offset: None,
        }
    }
}

/// One execution context captured at dump time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routine {
    /// Id from the header, 0 when the header was malformed
    pub id: u64,

    /// Bracketed header text, verbatim ("chan receive, 5 minutes")
    pub state: String,

    /// Most recent call first
    pub frames: Vec<Frame>,

    /// The block exactly as it appeared in the input
    #[serde(skip)]
    pub raw: String,
}

impl Routine {
    /// Function of the top-most frame
    pub fn top_function(&self) -> Option<&str> {
        self.frames.first().map(|frame| frame.function.as_str())
    }

    /// State without the wait duration and other qualifiers ("chan receive")
    pub fn base_state(&self) -> &str {
        self.state
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    /// How long the routine has been blocked, when the runtime reported it
    pub fn wait_duration(&self) -> Option<&str> {
        self.state
            .split(',')
            .skip(1)
            .map(str::trim)
            .find(|part| part.ends_with(" minutes") || part.ends_with(" minute"))
    }
}

/// A recoverable issue met while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub kind: WarningKind,

    /// 1-based line in the input
    pub line: usize,

    /// Routine the issue belongs to, if it is inside a block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<u64>,

    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

/// Full parse result of one input
///
/// Built once by the parser and read-only afterwards, so it can be shared
/// between any number of readers.
#[derive(Debug, Clone)]
pub struct Dump {
    routines: Vec<Routine>,
    stats: Stats,
    warnings: Vec<ParseWarning>,
}

impl Dump {
    /// Assemble a dump and run aggregation over its routines
    pub fn new(
        routines: Vec<Routine>,
        warnings: Vec<ParseWarning>,
        policy: SignaturePolicy,
    ) -> Self {
        let stats = aggregate(&routines, policy);
        Self {
            routines,
            stats,
            warnings,
        }
    }

    /// Routines in source order
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Non-fatal issues; a non-empty list means "parsed with caveats"
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Statistics for one top-of-stack function
    pub fn function_stats(&self, function: &str) -> Option<&RoutineStats> {
        self.stats.by_function.get(function)
    }

    /// Resolve routine indexes held by the aggregation indexes
    pub fn resolve<'a>(
        &'a self,
        indexes: &'a [usize],
    ) -> impl Iterator<Item = &'a Routine> + 'a {
        indexes.iter().filter_map(move |&index| self.routines.get(index))
    }
}
