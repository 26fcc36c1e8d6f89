//! Diagnostic sink for surfacing parse warnings.
//!
//! The parser never depends on a sink being present: attaching one only
//! changes what gets reported, not what gets parsed.

use log::Level;

/// Receiver of leveled diagnostic messages
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);
}

/// Sink forwarding everything to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: "goroutine_grid::parser", level, "{}", message);
    }
}
