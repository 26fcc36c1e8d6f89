//! Dump parser.
//!
//! Drives the block parser over a whole input:
//! - skips blank runs and text outside blocks (with a warning)
//! - parses one routine per header, in source order
//! - aggregates the routines before handing the dump back
//!
//! Only input without any header fails; everything else yields a dump,
//! since runtimes under load routinely truncate their dumps.

use super::frame::{parse_header, split_lines, Line};
use super::routine::parse_block;
use super::schema::{Dump, ParseWarning};
use crate::utils::config::ParseOptions;
use crate::utils::diagnostics::DiagnosticSink;
use crate::utils::error::{DumpError, WarningKind};
use log::{debug, Level};
use std::path::Path;

/// Configurable dump parser
///
/// Holds no scratch state between calls, so one parser can be shared by
/// independent callers parsing different inputs.
#[derive(Default)]
pub struct DumpParser<'s> {
    options: ParseOptions,
    sink: Option<&'s dyn DiagnosticSink>,
}

impl<'s> DumpParser<'s> {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            sink: None,
        }
    }

    /// Report warnings to `sink` as they are found
    pub fn with_sink(mut self, sink: &'s dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a dump file
    ///
    /// # Errors
    /// * `DumpError::Io` - the file could not be read
    /// * `DumpError::EmptyInput` - no goroutine block in the file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dump, DumpError> {
        let path = path.as_ref();
        debug!("Reading dump from: {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Dumps are often interleaved with arbitrary process output
        let text = String::from_utf8_lossy(&bytes);
        self.parse_text(&text)
    }

    /// Parse dump text
    ///
    /// # Errors
    /// * `DumpError::EmptyInput` - no goroutine block in the text
    pub fn parse_text(&self, text: &str) -> Result<Dump, DumpError> {
        let keyword = self.options.keyword.as_str();
        let lines = split_lines(text);
        debug!("Parsing dump: {} lines, {} bytes", lines.len(), text.len());

        let mut routines = Vec::new();
        let mut warnings = Vec::new();
        let mut pos = 0;

        while pos < lines.len() {
            let line = &lines[pos];

            if line.is_blank() {
                pos += 1;
                continue;
            }

            if let Some(outcome) = parse_block(text, &lines, pos, keyword) {
                for warning in outcome.warnings {
                    self.record(&mut warnings, warning);
                }
                routines.push(outcome.routine);
                pos = outcome.next;
                continue;
            }

            let end = skip_stray_run(&lines, pos, keyword);
            let kind = if routines.is_empty() {
                WarningKind::UnexpectedPreamble
            } else {
                WarningKind::UnexpectedLine
            };
            self.record(
                &mut warnings,
                ParseWarning {
                    kind,
                    line: line.number,
                    routine_id: None,
                    message: format!(
                        "skipped {} line(s) outside any goroutine block, starting with '{}'",
                        end - pos,
                        line.text.trim()
                    ),
                },
            );
            pos = end;
        }

        if routines.is_empty() {
            return Err(DumpError::EmptyInput);
        }

        debug!(
            "Parsed {} routines with {} warnings",
            routines.len(),
            warnings.len()
        );

        Ok(Dump::new(routines, warnings, self.options.signature_policy))
    }

    fn record(&self, warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
        if let Some(sink) = self.sink {
            sink.emit(Level::Warn, &warning.to_string());
        }
        warnings.push(warning);
    }
}

/// End of a run of non-blank lines that are not headers
fn skip_stray_run(lines: &[Line<'_>], pos: usize, keyword: &str) -> usize {
    lines[pos..]
        .iter()
        .position(|line| line.is_blank() || parse_header(line.text, keyword).is_some())
        .map_or(lines.len(), |offset| pos + offset)
}

/// Parse dump text with default options
pub fn parse_text(text: &str) -> Result<Dump, DumpError> {
    DumpParser::default().parse_text(text)
}

/// Parse a dump file with default options
pub fn parse_file(path: impl AsRef<Path>) -> Result<Dump, DumpError> {
    DumpParser::default().parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl DiagnosticSink for Recorder {
        fn emit(&self, _level: Level, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_preamble_is_skipped_with_warning() {
        let text = "panic: deadlock\n\n[signal SIGQUIT]\n\ngoroutine 1 [running]:\nmain.main()\n\t/app/main.go:3\n";
        let dump = parse_text(text).unwrap();

        assert_eq!(dump.routines().len(), 1);
        assert_eq!(dump.warnings().len(), 2);
        assert!(dump
            .warnings()
            .iter()
            .all(|w| w.kind == WarningKind::UnexpectedPreamble));
        assert_eq!(dump.warnings()[1].line, 3);
    }

    #[test]
    fn test_trailing_text_is_unexpected_line() {
        let text = "goroutine 1 [running]:\nmain.main()\n\t/app/main.go:3\n\nexit status 2\n";
        let dump = parse_text(text).unwrap();

        assert_eq!(dump.warnings().len(), 1);
        assert_eq!(dump.warnings()[0].kind, WarningKind::UnexpectedLine);
        assert_eq!(dump.warnings()[0].line, 5);
    }

    #[test]
    fn test_no_header_is_empty_input() {
        assert!(matches!(parse_text(""), Err(DumpError::EmptyInput)));
        assert!(matches!(
            parse_text("just some log output\n"),
            Err(DumpError::EmptyInput)
        ));
    }

    #[test]
    fn test_sink_does_not_change_result() {
        let text = "goroutine x [running]:\nmain.main()\n";
        let recorder = Recorder::default();

        let with_sink = DumpParser::default()
            .with_sink(&recorder)
            .parse_text(text)
            .unwrap();
        let without_sink = parse_text(text).unwrap();

        assert_eq!(with_sink.routines(), without_sink.routines());
        assert_eq!(with_sink.warnings(), without_sink.warnings());
        assert_eq!(recorder.0.borrow().len(), with_sink.warnings().len());
    }

    #[test]
    fn test_custom_keyword() {
        let options = ParseOptions {
            keyword: "thread".to_string(),
            ..ParseOptions::default()
        };
        let dump = DumpParser::new(options)
            .parse_text("thread 3 [waiting]:\nworker.run()\n\t/w.go:9\n")
            .unwrap();

        assert_eq!(dump.routines()[0].id, 3);
    }
}
