use serde::Serialize;

/// A named group of examples, optionally preceded by free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    /// Ordinal position of the section within its file, starting at 0.
    pub index: usize,
    /// 1-based line number of the section header.
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub examples: Vec<Example>,
}

impl Section {
    pub fn new(name: impl Into<String>, index: usize, line: usize) -> Self {
        Self {
            name: name.into(),
            index,
            line,
            description: None,
            examples: Vec::new(),
        }
    }
}

/// One source / expected-tree pair.
///
/// `source` and `tree` have their leading and trailing blank lines removed; everything between
/// the first and last non-blank line is kept verbatim, indentation included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub name: String,
    pub source: String,
    pub tree: String,
    /// 1-based line number of the example header.
    pub line: usize,
}
