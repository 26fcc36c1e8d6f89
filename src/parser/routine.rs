//! Routine block parser.
//!
//! Turns one header plus the frames under it into a `Routine`. Problems
//! local to the block become warnings; the block is always recorded.

use super::frame::{parse_header, scan_frame, FrameScan, Line};
use super::schema::{ParseWarning, Routine};
use crate::utils::config::ELIDED_FRAMES_MARKER;
use crate::utils::error::WarningKind;

/// Result of parsing one block
#[derive(Debug, Clone)]
pub struct BlockOutcome {
    pub routine: Routine,
    pub warnings: Vec<ParseWarning>,

    /// Index of the first line after the block
    pub next: usize,
}

/// Parse the block whose header is at `pos`
///
/// Returns `None` if `pos` is not a header line. `text` must be the text
/// `lines` were split from; the routine's raw text is sliced out of it.
pub fn parse_block(
    text: &str,
    lines: &[Line<'_>],
    pos: usize,
    keyword: &str,
) -> Option<BlockOutcome> {
    let header_line = lines.get(pos)?;
    let header = parse_header(header_line.text, keyword)?;

    let mut warnings = Vec::new();

    let id = match header.id {
        Some(id) => id,
        None => {
            warnings.push(ParseWarning {
                kind: WarningKind::MalformedHeader,
                line: header_line.number,
                routine_id: None,
                message: format!("no numeric id in header '{}', using 0", header_line.text.trim()),
            });
            0
        }
    };
    let routine_id = header.id;

    let mut frames = Vec::new();
    let mut cursor = pos + 1;
    let mut last = pos;

    loop {
        match scan_frame(lines, cursor, keyword) {
            FrameScan::Frame { frame, consumed } => {
                if frame.location.is_none() && frame.function != ELIDED_FRAMES_MARKER {
                    warnings.push(ParseWarning {
                        kind: WarningKind::MissingLocation,
                        line: lines[cursor].number,
                        routine_id,
                        message: format!("frame '{}' has no location", frame.function),
                    });
                }
                frames.push(frame);
                last = cursor + consumed - 1;
                cursor += consumed;
            }
            FrameScan::OrphanLocation => {
                warnings.push(ParseWarning {
                    kind: WarningKind::UnexpectedLine,
                    line: lines[cursor].number,
                    routine_id,
                    message: format!(
                        "location '{}' without a function line, skipped",
                        lines[cursor].text.trim()
                    ),
                });
                last = cursor;
                cursor += 1;
            }
            FrameScan::Boundary => break,
        }
    }

    if frames.is_empty() {
        warnings.push(ParseWarning {
            kind: WarningKind::EmptyStack,
            line: header_line.number,
            routine_id,
            message: "routine has no frames".to_string(),
        });
    }

    let raw = text[header_line.start..lines[last].end].to_string();

    Some(BlockOutcome {
        routine: Routine {
            id,
            state: header.state.to_string(),
            frames,
            raw,
        },
        warnings,
        next: cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::frame::split_lines;

    const KEYWORD: &str = "goroutine";

    fn parse(text: &str) -> BlockOutcome {
        let lines = split_lines(text);
        parse_block(text, &lines, 0, KEYWORD).expect("header expected")
    }

    #[test]
    fn test_parse_block_basic() {
        let text = "goroutine 7 [select]:\nmain.loop()\n\t/app/loop.go:10 +0x2a\nmain.main()\n\t/app/main.go:3\n\ntrailing";
        let outcome = parse(text);

        assert_eq!(outcome.routine.id, 7);
        assert_eq!(outcome.routine.state, "select");
        assert_eq!(outcome.routine.frames.len(), 2);
        assert_eq!(outcome.routine.frames[0].offset, Some(0x2a));
        assert_eq!(outcome.next, 5);
        assert!(outcome.warnings.is_empty());
        assert_eq!(
            outcome.routine.raw,
            "goroutine 7 [select]:\nmain.loop()\n\t/app/loop.go:10 +0x2a\nmain.main()\n\t/app/main.go:3"
        );
    }

    #[test]
    fn test_parse_block_stops_at_next_header() {
        let text = "goroutine 1 [running]:\nmain.a()\n\t/a.go:1\ngoroutine 2 [running]:\nmain.b()\n\t/b.go:2\n";
        let outcome = parse(text);

        assert_eq!(outcome.routine.frames.len(), 1);
        assert_eq!(outcome.next, 3);
    }

    #[test]
    fn test_parse_block_not_a_header() {
        let text = "main.main()\n";
        let lines = split_lines(text);
        assert!(parse_block(text, &lines, 0, KEYWORD).is_none());
    }

    #[test]
    fn test_parse_block_empty_stack() {
        let outcome = parse("goroutine 3 [running]:\n\n");

        assert!(outcome.routine.frames.is_empty());
        assert_eq!(outcome.routine.raw, "goroutine 3 [running]:");
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::EmptyStack);
    }

    #[test]
    fn test_parse_block_missing_location() {
        let outcome = parse("goroutine 4 [running]:\n\tgoroutine running on other thread; stack unavailable\n");

        assert_eq!(outcome.routine.frames.len(), 1);
        assert!(outcome.routine.frames[0].location.is_none());
        assert_eq!(outcome.warnings[0].kind, WarningKind::MissingLocation);
        assert_eq!(outcome.warnings[0].routine_id, Some(4));
        assert_eq!(outcome.warnings[0].line, 2);
    }

    #[test]
    fn test_parse_block_elided_frames_are_not_warned() {
        let outcome = parse("goroutine 9 [running]:\nmain.deep()\n\t/a.go:1\n...additional frames elided...\n");

        assert_eq!(outcome.routine.frames.len(), 2);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_parse_block_orphan_location() {
        let outcome = parse("goroutine 5 [idle]:\n\t/a.go:1\nmain.f()\n\t/a.go:2\n");

        assert_eq!(outcome.routine.frames.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::UnexpectedLine);
        assert_eq!(outcome.next, 4);
    }
}
