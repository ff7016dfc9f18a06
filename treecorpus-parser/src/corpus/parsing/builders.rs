//! Section and example builders
//!
//!     Builders hold the text buffers of the section and example currently being read. They are
//!     owned by the parse state of a single pass and turned into immutable [Section]s and
//!     [Example]s when the pass moves past them.

use crate::corpus::ast::{Example, Section};
use crate::corpus::lexing::ClassifiedLine;

/// Where the content lines of an example go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    Source,
    Tree,
}

#[derive(Debug)]
pub struct ExampleBuilder {
    name: String,
    line: usize,
    source: String,
    tree: String,
    mode: CollectMode,
}

impl ExampleBuilder {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            source: String::new(),
            tree: String::new(),
            mode: CollectMode::Source,
        }
    }

    pub fn mode(&self) -> CollectMode {
        self.mode
    }

    /// Send every following line to the tree buffer. There is no way back.
    pub fn switch_to_tree(&mut self) {
        self.mode = CollectMode::Tree;
    }

    /// Append a content line to the active buffer. Blank lines ahead of any source text are
    /// dropped.
    pub fn push(&mut self, line: &ClassifiedLine<'_>) {
        match self.mode {
            CollectMode::Source if self.source.is_empty() && line.is_blank() => {}
            CollectMode::Source => self.source.push_str(line.raw),
            CollectMode::Tree => self.tree.push_str(line.raw),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn finish(self) -> Example {
        Example {
            name: self.name,
            source: trim_blank_lines(&self.source),
            tree: trim_blank_lines(&self.tree),
            line: self.line,
        }
    }
}

#[derive(Debug)]
pub struct SectionBuilder {
    name: String,
    index: usize,
    line: usize,
    description: String,
    examples: Vec<Example>,
    current: Option<ExampleBuilder>,
}

impl SectionBuilder {
    pub fn new(name: impl Into<String>, index: usize, line: usize) -> Self {
        Self {
            name: name.into(),
            index,
            line,
            description: String::new(),
            examples: Vec::new(),
            current: None,
        }
    }

    /// Finalize the open example, if any, and open a new one.
    pub fn start_example(&mut self, name: impl Into<String>, line: usize) {
        self.close_example();
        self.current = Some(ExampleBuilder::new(name, line));
    }

    pub fn current_example(&mut self) -> Option<&mut ExampleBuilder> {
        self.current.as_mut()
    }

    pub fn current_example_source(&self) -> Option<&str> {
        self.current.as_ref().map(ExampleBuilder::source)
    }

    pub fn current_example_mode(&self) -> Option<CollectMode> {
        self.current.as_ref().map(ExampleBuilder::mode)
    }

    pub fn push_description(&mut self, line: &ClassifiedLine<'_>) {
        self.description.push_str(line.raw);
    }

    fn close_example(&mut self) {
        if let Some(example) = self.current.take() {
            self.examples.push(example.finish());
        }
    }

    pub fn finish(mut self) -> Section {
        self.close_example();
        let description = trim_blank_lines(&self.description);
        Section {
            name: self.name,
            index: self.index,
            line: self.line,
            description: (!description.is_empty()).then_some(description),
            examples: self.examples,
        }
    }
}

/// Drop leading and trailing blank lines and the terminator of the last kept line. The text
/// between the first and last non-blank line is kept as is, indentation and trailing spaces
/// included.
pub fn trim_blank_lines(text: &str) -> String {
    let start: usize = text
        .split_inclusive('\n')
        .take_while(|line| line.trim().is_empty())
        .map(str::len)
        .sum();
    let rest = &text[start..];
    let trailing: usize = rest
        .split_inclusive('\n')
        .rev()
        .take_while(|line| line.trim().is_empty())
        .map(str::len)
        .sum();
    let kept = &rest[..rest.len() - trailing];
    let kept = kept.strip_suffix('\n').unwrap_or(kept);
    kept.strip_suffix('\r').unwrap_or(kept).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("\n\n", "")]
    #[case("a;\n", "a;")]
    #[case("\n\na;\n\n\n", "a;")]
    #[case("\n  indented\n    more\n\n", "  indented\n    more")]
    #[case("first\n\n\nlast\n", "first\n\n\nlast")]
    #[case("  \t\n(a\n  (b))\n \n", "(a\n  (b))")]
    #[case("  a;\t  \n\n", "  a;\t  ")]
    #[case("a;\r\n\r\n", "a;")]
    fn trims_only_outer_blank_lines(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_blank_lines(input), expected);
    }

    #[test]
    fn blank_lines_before_source_are_dropped() {
        let mut example = ExampleBuilder::new("e", 1);
        example.push(&ClassifiedLine::new(2, "\n"));
        example.push(&ClassifiedLine::new(3, "   \n"));
        assert_eq!(example.source(), "");
        example.push(&ClassifiedLine::new(4, "x;\n"));
        example.push(&ClassifiedLine::new(5, "\n"));
        assert_eq!(example.source(), "x;\n\n");
    }

    #[test]
    fn tree_mode_is_sticky() {
        let mut example = ExampleBuilder::new("e", 1);
        example.push(&ClassifiedLine::new(2, "x;\n"));
        example.switch_to_tree();
        example.push(&ClassifiedLine::new(3, "(x)\n"));
        example.push(&ClassifiedLine::new(4, "y;\n"));
        assert_eq!(example.mode(), CollectMode::Tree);
        let example = example.finish();
        assert_eq!(example.source, "x;");
        assert_eq!(example.tree, "(x)\ny;");
    }

    #[test]
    fn empty_description_becomes_none() {
        let section = SectionBuilder::new("s", 0, 1).finish();
        assert_eq!(section.description, None);
        assert!(section.examples.is_empty());
    }

    #[test]
    fn starting_an_example_closes_the_previous_one() {
        let mut section = SectionBuilder::new("s", 0, 1);
        section.push_description(&ClassifiedLine::new(2, "about s\n"));
        section.start_example("one", 3);
        section.start_example("two", 4);
        assert_eq!(section.current_example_mode(), Some(CollectMode::Source));
        let section = section.finish();
        assert_eq!(section.description.as_deref(), Some("about s"));
        let names: Vec<_> = section.examples.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["one", "two"]);
    }
}
