//! Goroutine Grid
//!
//! Parses goroutine dumps (the stack snapshot a Go runtime prints on
//! SIGQUIT, panic or `debug.Stack`) into a typed model and groups the
//! routines for diagnosing deadlocks, leaks and hot spots.
//!
//! ## Getting Started
//!
//! ```no_run
//! let dump = goroutine_grid::parse_file("goroutines.txt")?;
//!
//! for (function, group) in &dump.stats().by_function {
//!     println!("{} routines ({} unique stacks) in {}", group.total(), group.unique(), function);
//! }
//! # Ok::<(), goroutine_grid::DumpError>(())
//! ```
//!
//! The `grid` CLI wraps this library:
//!
//! ```bash
//! grid summary goroutines.txt --top 20
//! grid show goroutines.txt 'runtime.gopark(...)'
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::{parse_file, parse_text, Dump, DumpParser};
pub use utils::{DumpError, ParseOptions, SignaturePolicy};
