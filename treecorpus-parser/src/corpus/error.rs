//! Error types and exit codes

use std::path::PathBuf;

/// Exit codes for the corpus tools.
pub mod codes {
    pub const SUCCESS: u8 = 0;
    pub const FAILING_RECORDS: u8 = 1;
    pub const INPUT_NOT_FOUND: u8 = 2;
    pub const ENGINE_LOAD_FAILED: u8 = 3;
    pub const CONFIG_ERROR: u8 = 4;
    pub const OUTPUT_FAILED: u8 = 5;
}

/// Errors that abort a parse or validation run.
///
/// Per-record problems (a tree mismatch, an engine error on one snippet) are never reported
/// through this type; they end up in the validation report instead.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(String),

    #[error("grammar engine could not be loaded: {0}")]
    EngineLoad(String),

    #[error("invalid filter pattern '{pattern}': {message}")]
    InvalidFilter { pattern: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorpusError {
    /// Wrap an IO error, promoting "not found" to [`CorpusError::InputNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::InputNotFound(path)
        } else {
            CorpusError::Io { path, source }
        }
    }
}

pub type CorpusResult<T> = Result<T, CorpusError>;

/// Map an error to its exit code.
pub fn exit_code(err: &CorpusError) -> u8 {
    match err {
        CorpusError::InputNotFound(_) => codes::INPUT_NOT_FOUND,
        CorpusError::Io { .. } => codes::INPUT_NOT_FOUND,
        CorpusError::Walk(_) => codes::INPUT_NOT_FOUND,
        CorpusError::EngineLoad(_) => codes::ENGINE_LOAD_FAILED,
        CorpusError::InvalidFilter { .. } => codes::CONFIG_ERROR,
        CorpusError::Json(_) => codes::OUTPUT_FAILED,
    }
}
