//! The grammar engine seam.

use std::time::Duration;

/// Errors a grammar engine can raise for a single call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("parse failed: {0}")]
    Parse(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The engine cannot be used at all; no later call will succeed either.
    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Unavailable(_))
    }
}

/// Something that can parse source text and render the resulting tree.
///
/// Calls are made one at a time, in record order. Engines with an asynchronous core are expected
/// to block until the call completes.
pub trait GrammarEngine {
    type Tree;

    fn parse(&self, source: &str) -> Result<Self::Tree, EngineError>;

    fn render(&self, tree: &Self::Tree) -> Result<String, EngineError>;

    /// Parse and render in one go.
    fn parse_and_render(&self, source: &str) -> Result<String, EngineError> {
        let tree = self.parse(source)?;
        self.render(&tree)
    }
}

impl<E: GrammarEngine + ?Sized> GrammarEngine for &E {
    type Tree = E::Tree;

    fn parse(&self, source: &str) -> Result<Self::Tree, EngineError> {
        (**self).parse(source)
    }

    fn render(&self, tree: &Self::Tree) -> Result<String, EngineError> {
        (**self).render(tree)
    }
}
