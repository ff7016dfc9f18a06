//! Parsing module for corpus files
//!
//!     Parsing turns the classified lines of one [CorpusDocument] into a [ParsedCorpus]. Two
//!     header conventions exist in the wild and they cannot be told apart reliably, so the caller
//!     picks one explicitly through [Dialect]:
//!
//!         - [Dialect::SingleLine]: the default. A header's name sits on the header line itself
//!           (`=== name ===`, `--- name ---`). See [engine].
//!         - [Dialect::Delimited]: the name is the block of lines between two `===` delimiters
//!           and `---` divides source from tree. See [delimited].
//!
//!     Both are pure folds over the lines of a single document.

pub mod builders;
pub mod delimited;
pub mod engine;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::corpus::ast::{CorpusDocument, ParsedCorpus};
use crate::corpus::lexing::classified_lines;

pub use builders::CollectMode;
pub use delimited::{fold_lines_delimited, DelimitedState};
pub use engine::{fold_lines, ParseState, Phase};

/// Header convention of a corpus file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    #[default]
    SingleLine,
    Delimited,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::SingleLine, Dialect::Delimited];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::SingleLine => "single-line",
            Dialect::Delimited => "delimited",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| format!("unknown dialect '{}', use single-line or delimited", s))
    }
}

/// Parse corpus text with the default dialect.
pub fn parse_corpus(text: &str) -> ParsedCorpus {
    parse_corpus_with(&CorpusDocument::new(text, None), Dialect::default())
}

/// Parse a document with an explicit dialect.
pub fn parse_corpus_with(document: &CorpusDocument, dialect: Dialect) -> ParsedCorpus {
    let lines = classified_lines(document.text());
    let origin = document.origin().map(|p| p.to_path_buf());
    let corpus = match dialect {
        Dialect::SingleLine => fold_lines(lines, origin),
        Dialect::Delimited => fold_lines_delimited(lines, origin),
    };
    debug!(
        origin = ?document.origin(),
        %dialect,
        sections = corpus.sections.len(),
        examples = corpus.example_count(),
        "parsed corpus"
    );
    corpus
}
