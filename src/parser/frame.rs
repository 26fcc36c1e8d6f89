//! Line tokenizing and the frame scanner.
//!
//! A frame is a function line optionally followed by a location line:
//!
//! ```text
//! main.worker(0xc000012345)
//!         /app/worker.go:42 +0x1b
//! ```
//!
//! Function lines never parse as `path:line`; location lines always do.

use super::schema::{Frame, Location};

/// One input line with its byte span in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without the line terminator
    pub text: &'a str,

    /// 1-based line number
    pub number: usize,

    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset just past the content, terminator excluded
    pub end: usize,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split text into lines, accepting both `\n` and `\r\n` terminators
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (index, chunk) in text.split_inclusive('\n').enumerate() {
        let content = chunk.strip_suffix('\n').unwrap_or(chunk);
        let content = content.strip_suffix('\r').unwrap_or(content);
        lines.push(Line {
            text: content,
            number: index + 1,
            start,
            end: start + content.len(),
        });
        start += chunk.len();
    }

    lines
}

/// Parsed block header ("goroutine 18 [chan receive, 5 minutes]:")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// `None` when the id is missing or not numeric
    pub id: Option<u64>,
    pub state: &'a str,
}

/// Recognize a header line
///
/// Anything between the id and the bracket (newer runtimes print
/// `gp=0x.. m=..` there) is ignored.
pub fn parse_header<'a>(text: &'a str, keyword: &str) -> Option<Header<'a>> {
    let rest = text.trim().strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rest = rest.strip_suffix(':')?.strip_suffix(']')?;
    let (id_part, state) = rest.split_once('[')?;

    let id = id_part
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u64>().ok());

    Some(Header { id, state })
}

/// Recognize a location line, returning the location and its PC offset
pub fn parse_location(text: &str) -> Option<(Location, Option<u64>)> {
    let text = text.trim();

    let (location, offset) = match text.find(" +0x") {
        Some(pos) => {
            let hex = text[pos + 4..].split_whitespace().next().unwrap_or_default();
            (&text[..pos], u64::from_str_radix(hex, 16).ok())
        }
        None => (text, None),
    };

    let (file, line) = location.trim_end().rsplit_once(':')?;
    if file.is_empty() || line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let line = line.parse::<u32>().ok()?;
    Some((
        Location {
            file: file.to_string(),
            line,
        },
        offset,
    ))
}

/// Outcome of looking for a frame at a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameScan {
    /// A frame and the number of lines it spans (1 or 2)
    Frame { frame: Frame, consumed: usize },

    /// A location line with no function line before it
    OrphanLocation,

    /// Blank line, next header or end of input; nothing consumed
    Boundary,
}

/// Look for a frame starting at `pos`
pub fn scan_frame(lines: &[Line<'_>], pos: usize, keyword: &str) -> FrameScan {
    let Some(line) = lines.get(pos) else {
        return FrameScan::Boundary;
    };

    if line.is_blank() || parse_header(line.text, keyword).is_some() {
        return FrameScan::Boundary;
    }

    if parse_location(line.text).is_some() {
        return FrameScan::OrphanLocation;
    }

    let mut frame = Frame::new(line.text.trim(), None);

    let location = lines
        .get(pos + 1)
        .filter(|next| !next.is_blank() && parse_header(next.text, keyword).is_none())
        .and_then(|next| parse_location(next.text));

    match location {
        Some((location, offset)) => {
            frame.location = Some(location);
            frame.offset = offset;
            FrameScan::Frame { frame, consumed: 2 }
        }
        None => FrameScan::Frame { frame, consumed: 1 },
    }
}
