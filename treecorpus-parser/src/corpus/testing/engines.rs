use std::collections::HashMap;

use crate::corpus::validation::{EngineError, GrammarEngine};

/// Engine answering from a table keyed by the exact source text.
#[derive(Debug, Clone, Default)]
pub struct MapEngine {
    trees: HashMap<String, String>,
}

impl MapEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, tree: impl Into<String>) -> Self {
        self.trees.insert(source.into(), tree.into());
        self
    }
}

impl GrammarEngine for MapEngine {
    type Tree = String;

    fn parse(&self, source: &str) -> Result<String, EngineError> {
        self.trees
            .get(source)
            .cloned()
            .ok_or_else(|| EngineError::Parse(format!("no tree for {:?}", source)))
    }

    fn render(&self, tree: &String) -> Result<String, EngineError> {
        Ok(tree.clone())
    }
}

/// Engine rendering through a closure.
pub struct FnEngine<F> {
    render: F,
}

impl<F> FnEngine<F>
where
    F: Fn(&str) -> Result<String, EngineError>,
{
    pub fn new(render: F) -> Self {
        Self { render }
    }
}

impl<F> GrammarEngine for FnEngine<F>
where
    F: Fn(&str) -> Result<String, EngineError>,
{
    type Tree = String;

    fn parse(&self, source: &str) -> Result<String, EngineError> {
        (self.render)(source)
    }

    fn render(&self, tree: &String) -> Result<String, EngineError> {
        Ok(tree.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_engine_rejects_unknown_sources() {
        let engine = MapEngine::new().with("a;", "(a)");
        assert_eq!(engine.parse_and_render("a;").unwrap(), "(a)");
        assert!(matches!(engine.parse("b;"), Err(EngineError::Parse(_))));
    }
}
