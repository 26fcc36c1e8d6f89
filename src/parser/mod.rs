//! Goroutine dump parsing and schema definitions.
//!
//! This module handles:
//! - Tokenizing frames (function line + location line)
//! - Parsing one routine block per header
//! - Driving the block parser over a whole dump
//! - Defining the parsed model

pub mod dump;
pub mod frame;
pub mod routine;
pub mod schema;

// Re-export main types
pub use dump::{parse_file, parse_text, DumpParser};
pub use schema::{Dump, Frame, Location, ParseWarning, Routine};
