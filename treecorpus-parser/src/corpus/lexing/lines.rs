//! Splitting corpus text into numbered, classified lines.

use super::line_classification::{classify_line, header_name, LineType};

/// One line of corpus text with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// The line including its terminator, if it had one
    pub raw: &'a str,
    /// The line without its terminator
    pub text: &'a str,
    pub line_type: LineType,
}

impl<'a> ClassifiedLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Self {
            number,
            raw,
            text,
            line_type: classify_line(text),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The header name, for header lines.
    pub fn header_name(&self) -> Option<&'a str> {
        self.line_type
            .marker()
            .map(|marker| header_name(self.text, marker))
    }
}

/// Iterate over the lines of `text`, numbered from 1. Empty text has no lines.
pub fn classified_lines(text: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(i, raw)| ClassifiedLine::new(i + 1, raw))
}
