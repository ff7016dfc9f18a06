//! Where a test record came from.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Origin of a test record: the corpus file plus the 1-based header lines of its section and
/// example.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub section_line: usize,
    pub example_line: usize,
}

impl Location {
    pub fn new(file: Option<PathBuf>, section_line: usize, example_line: usize) -> Self {
        Self {
            file,
            section_line,
            example_line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}", file.display(), self.example_line),
            None => write!(f, "<input>:{}", self.example_line),
        }
    }
}
