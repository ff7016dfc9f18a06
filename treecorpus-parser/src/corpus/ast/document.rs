use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{Section, TestRecord};
use crate::corpus::parsing::{parse_corpus_with, Dialect};

/// The full text of one corpus file plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    text: String,
    origin: Option<PathBuf>,
}

impl CorpusDocument {
    pub fn new(text: impl Into<String>, origin: Option<PathBuf>) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Run a parse pass over this document.
    pub fn parse(&self, dialect: Dialect) -> ParsedCorpus {
        parse_corpus_with(self, dialect)
    }
}

/// Result of one parse pass: the sections of a single corpus file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCorpus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<PathBuf>,
    pub sections: Vec<Section>,
}

impl ParsedCorpus {
    /// Flatten into one record per example. Sections without examples contribute nothing.
    pub fn records(&self) -> Vec<TestRecord> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.examples.iter().map(move |example| {
                    TestRecord::from_example(section, example, self.origin.as_deref())
                })
            })
            .collect()
    }

    pub fn example_count(&self) -> usize {
        self.sections.iter().map(|s| s.examples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
