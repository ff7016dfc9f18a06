//! Corpus loading utilities
//!
//! This module provides [`CorpusLoader`], which reads one corpus file (or takes corpus text from
//! a string) and parses it, and [`load_corpora`], which does the same for every corpus file
//! found under a directory.
//!
//! # Example
//!
//! ```rust
//! use treecorpus_parser::corpus::loader::CorpusLoader;
//! use treecorpus_parser::corpus::Dialect;
//!
//! let records = CorpusLoader::from_path("corpus/expressions.txt")
//!     .unwrap()
//!     .records(Dialect::SingleLine);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::corpus::ast::{CorpusDocument, ParsedCorpus, TestRecord};
use crate::corpus::error::{CorpusError, CorpusResult};
use crate::corpus::parsing::Dialect;

/// Extension of corpus files when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = "txt";

pub struct CorpusLoader {
    document: CorpusDocument,
}

impl CorpusLoader {
    /// Load from a file path. A missing file is [`CorpusError::InputNotFound`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> CorpusResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded corpus file");
        Ok(CorpusLoader {
            document: CorpusDocument::new(text, Some(path.to_path_buf())),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(text: S) -> Self {
        CorpusLoader {
            document: CorpusDocument::new(text, None),
        }
    }

    /// Attach an origin to string-loaded text, so records point somewhere useful.
    pub fn with_origin(self, origin: impl Into<PathBuf>) -> Self {
        CorpusLoader {
            document: CorpusDocument::new(self.document.text().to_string(), Some(origin.into())),
        }
    }

    pub fn parse(&self, dialect: Dialect) -> ParsedCorpus {
        self.document.parse(dialect)
    }

    pub fn records(&self, dialect: Dialect) -> Vec<TestRecord> {
        self.parse(dialect).records()
    }
}

/// Which files count as corpus files and how to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub dialect: Dialect,
    /// Accepted file extensions, without the dot. Empty accepts every file.
    pub extensions: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

fn has_corpus_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Recursively collect corpus files under `root`, sorted for a deterministic order.
///
/// A `root` that is itself a file is returned as the only entry, whatever its extension.
pub fn discover_corpus_files<P: AsRef<Path>>(
    root: P,
    extensions: &[String],
) -> CorpusResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(CorpusError::InputNotFound(root.to_path_buf()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| CorpusError::Walk(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if has_corpus_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered corpus files");
    Ok(files)
}

/// Parse every corpus file under `root` (or `root` itself when it is a file).
pub fn load_corpora<P: AsRef<Path>>(
    root: P,
    options: &LoadOptions,
) -> CorpusResult<Vec<ParsedCorpus>> {
    discover_corpus_files(root, &options.extensions)?
        .into_iter()
        .map(|path| Ok(CorpusLoader::from_path(&path)?.parse(options.dialect)))
        .collect()
}
