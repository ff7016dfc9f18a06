//! Corpus state machine for the single-line header dialect
//!
//!     The parse pass is a fold over classified lines: [ParseState::step] takes the state by
//!     value, consumes one line and hands the state back. Nothing outlives a pass, so parsing
//!     two files never shares buffers or records.
//!
//! States
//!
//!         AwaitingSection        no section header seen yet; every line is ignored
//!         CollectingDescription  inside a section, before its first example header
//!         InExample(Source)      collecting the example's source text
//!         InExample(Tree)        collecting the example's expected tree
//!
//!     A section header always opens a new section, closing the open example and section. An
//!     example header closes the open example and opens a new one. Within an example, the first
//!     line whose trimmed text starts with `(` moves collection from source to tree for the rest
//!     of the example. This is a heuristic, not a check on the tree's shape: tree text is opaque
//!     until it is compared.

use std::path::PathBuf;

use tracing::{trace, warn};

use super::builders::{CollectMode, SectionBuilder};
use crate::corpus::ast::{ParsedCorpus, Section};
use crate::corpus::lexing::{ClassifiedLine, LineType};

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingSection,
    CollectingDescription,
    InExample(CollectMode),
}

/// Accumulated state of a single parse pass.
#[derive(Debug, Default)]
pub struct ParseState {
    sections: Vec<Section>,
    current: Option<SectionBuilder>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match &self.current {
            None => Phase::AwaitingSection,
            Some(section) => match section.current_example_mode() {
                None => Phase::CollectingDescription,
                Some(mode) => Phase::InExample(mode),
            },
        }
    }

    /// Source text collected so far for the open example.
    pub fn current_source(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(SectionBuilder::current_example_source)
    }

    /// Consume one line.
    pub fn step(mut self, line: ClassifiedLine<'_>) -> Self {
        match line.line_type {
            LineType::SectionHeader => {
                self.close_section();
                let name = line.header_name().unwrap_or_default();
                trace!(line = line.number, name, "section header");
                self.current = Some(SectionBuilder::new(name, self.sections.len(), line.number));
            }
            LineType::ExampleHeader => match self.current.as_mut() {
                Some(section) => {
                    let name = line.header_name().unwrap_or_default();
                    trace!(line = line.number, name, "example header");
                    section.start_example(name, line.number);
                }
                None => warn!(
                    line = line.number,
                    "example header before the first section header, ignoring"
                ),
            },
            LineType::Content => {
                if let Some(section) = self.current.as_mut() {
                    match section.current_example() {
                        Some(example) => {
                            if example.mode() == CollectMode::Source && opens_tree(&line) {
                                trace!(line = line.number, "switching to tree text");
                                example.switch_to_tree();
                            }
                            example.push(&line);
                        }
                        None if !line.is_blank() => section.push_description(&line),
                        None => {}
                    }
                }
            }
        }
        self
    }

    /// End of input: close whatever is still open.
    pub fn finish(mut self, origin: Option<PathBuf>) -> ParsedCorpus {
        self.close_section();
        ParsedCorpus {
            origin,
            sections: self.sections,
        }
    }

    fn close_section(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section.finish());
        }
    }
}

/// Whether a content line starts the tree text of an example.
pub fn opens_tree(line: &ClassifiedLine<'_>) -> bool {
    line.text.trim_start().starts_with('(')
}

/// Fold a sequence of lines into sections.
pub fn fold_lines<'a, I>(lines: I, origin: Option<PathBuf>) -> ParsedCorpus
where
    I: IntoIterator<Item = ClassifiedLine<'a>>,
{
    lines
        .into_iter()
        .fold(ParseState::new(), ParseState::step)
        .finish(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::lexing::classified_lines;

    fn parse(text: &str) -> ParsedCorpus {
        fold_lines(classified_lines(text), None)
    }

    #[test]
    fn phases_follow_the_headers() {
        let text = "intro\n=== s ===\nabout\n--- e ---\nx;\n(x)\n";
        let mut state = ParseState::new();
        let mut phases = Vec::new();
        for line in classified_lines(text) {
            state = state.step(line);
            phases.push(state.phase());
        }
        assert_eq!(
            phases,
            [
                Phase::AwaitingSection,
                Phase::CollectingDescription,
                Phase::CollectingDescription,
                Phase::InExample(CollectMode::Source),
                Phase::InExample(CollectMode::Source),
                Phase::InExample(CollectMode::Tree),
            ]
        );
    }

    #[test]
    fn lines_before_the_first_section_are_ignored() {
        let corpus = parse("loose text\n--- orphan ---\n(x)\n=== s ===\n--- e ---\na;\n(a)\n");
        assert_eq!(corpus.sections.len(), 1);
        assert_eq!(corpus.sections[0].examples.len(), 1);
        assert_eq!(corpus.sections[0].examples[0].name, "e");
    }

    #[test]
    fn description_skips_blank_lines_and_is_trimmed() {
        let corpus = parse("=== s ===\n\nfirst line\n\nsecond line\n\n--- e ---\na;\n(a)\n");
        let section = &corpus.sections[0];
        assert_eq!(
            section.description.as_deref(),
            Some("first line\nsecond line")
        );
    }

    #[test]
    fn section_header_closes_the_open_example() {
        let corpus = parse("=== one ===\n--- a ---\nx;\n(x)\n=== two ===\n--- b ---\ny;\n(y)\n");
        assert_eq!(corpus.sections.len(), 2);
        assert_eq!(corpus.sections[0].examples[0].tree, "(x)");
        assert_eq!(corpus.sections[1].examples[0].source, "y;");
        assert_eq!(corpus.sections[1].index, 1);
        assert_eq!(corpus.sections[1].line, 5);
    }

    #[test]
    fn indented_paren_line_switches_too() {
        let corpus = parse("=== s ===\n--- e ---\nf(x);\n  (call (id))\n");
        let example = &corpus.sections[0].examples[0];
        assert_eq!(example.source, "f(x);");
        assert_eq!(example.tree, "  (call (id))");
    }

    #[test]
    fn source_lines_after_the_switch_go_to_the_tree() {
        let corpus = parse("=== s ===\n--- e ---\na;\n(a)\nb;\n\n");
        let example = &corpus.sections[0].examples[0];
        assert_eq!(example.source, "a;");
        assert_eq!(example.tree, "(a)\nb;");
    }

    #[test]
    fn example_without_tree_has_empty_tree() {
        let corpus = parse("=== s ===\n--- e ---\n\na;\nb;\n");
        let example = &corpus.sections[0].examples[0];
        assert_eq!(example.source, "a;\nb;");
        assert_eq!(example.tree, "");
    }

    #[test]
    fn section_without_examples_is_kept() {
        let corpus = parse("=== empty ===\njust words\n=== full ===\n--- e ---\na;\n(a)\n");
        assert_eq!(corpus.sections.len(), 2);
        assert!(corpus.sections[0].examples.is_empty());
        assert_eq!(corpus.records().len(), 1);
    }

    #[test]
    fn short_marker_runs_are_content() {
        let corpus = parse("=== s ===\n--- e ---\n-- comment\n== eq\n(a)\n");
        let example = &corpus.sections[0].examples[0];
        assert_eq!(example.source, "-- comment\n== eq");
    }
}
