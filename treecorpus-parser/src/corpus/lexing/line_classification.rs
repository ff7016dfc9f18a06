//! Line Classification
//!
//!     A line is a header when it starts with a run of at least [MIN_MARKER_RUN] marker
//!     characters: `=` for section headers, `-` for example headers. The run has to start at the
//!     first column. Anything else, blank lines and lines with a shorter run included, is content.
//!
//!     A header's name is whatever is left of the line once the leading and trailing marker runs
//!     and the surrounding whitespace are stripped, so `=== literals ===`, `===literals` and
//!     `=== literals` all name the section `literals`. A bare marker run names the header with
//!     the empty string.

use std::fmt;

/// Marker character of a section header line.
pub const SECTION_MARKER: char = '=';
/// Marker character of an example header line.
pub const EXAMPLE_MARKER: char = '-';
/// Minimum number of marker characters that make a line a header.
pub const MIN_MARKER_RUN: usize = 3;

/// The classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Starts with three or more `=`
    SectionHeader,
    /// Starts with three or more `-`
    ExampleHeader,
    /// Any other line, blank lines included
    Content,
}

impl LineType {
    /// The marker character for header types.
    pub fn marker(self) -> Option<char> {
        match self {
            LineType::SectionHeader => Some(SECTION_MARKER),
            LineType::ExampleHeader => Some(EXAMPLE_MARKER),
            LineType::Content => None,
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::SectionHeader => "SECTION_HEADER",
            LineType::ExampleHeader => "EXAMPLE_HEADER",
            LineType::Content => "CONTENT",
        };
        write!(f, "{}", name)
    }
}

/// Determine the type of a line. The line may or may not carry its terminator.
pub fn classify_line(line: &str) -> LineType {
    if marker_run(line, SECTION_MARKER).len() >= MIN_MARKER_RUN {
        LineType::SectionHeader
    } else if marker_run(line, EXAMPLE_MARKER).len() >= MIN_MARKER_RUN {
        LineType::ExampleHeader
    } else {
        LineType::Content
    }
}

/// The leading run of `marker` characters of `line`.
pub fn marker_run(line: &str, marker: char) -> &str {
    let end = line
        .char_indices()
        .find(|&(_, c)| c != marker)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}

/// Extract a header name by stripping the marker runs at both ends and surrounding whitespace.
pub fn header_name(line: &str, marker: char) -> &str {
    line.trim()
        .trim_start_matches(marker)
        .trim_end_matches(marker)
        .trim()
}
