//! Corpus state machine for the two-delimiter header dialect
//!
//!     In this dialect a test looks like:
//!
//!         ==================
//!         name, possibly
//!         over several lines
//!         ==================
//!
//!         source
//!
//!         ---
//!
//!         (tree)
//!
//!     The lines between a pair of `===` delimiters form the name. Closing the pair opens a section
//!     and a single example under the same name. Content goes to the source until the first `---`
//!     line, which divides source from tree; the `(` heuristic of the single-line dialect does not
//!     apply. Later `---` lines belong to the tree text.

use std::path::PathBuf;

use tracing::{trace, warn};

use super::builders::{CollectMode, SectionBuilder};
use crate::corpus::ast::{ParsedCorpus, Section};
use crate::corpus::lexing::{ClassifiedLine, LineType};

#[derive(Debug)]
struct HeaderBlock {
    line: usize,
    name_lines: Vec<String>,
}

impl HeaderBlock {
    fn name(&self) -> String {
        self.name_lines.join("\n").trim().to_string()
    }
}

/// Accumulated state of a single delimited-dialect parse pass.
#[derive(Debug, Default)]
pub struct DelimitedState {
    sections: Vec<Section>,
    header: Option<HeaderBlock>,
    current: Option<SectionBuilder>,
}

impl DelimitedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the state machine is between a pair of `===` delimiters.
    pub fn in_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn step(mut self, line: ClassifiedLine<'_>) -> Self {
        if let Some(mut header) = self.header.take() {
            if line.line_type == LineType::SectionHeader {
                self.open_section(header);
            } else {
                header.name_lines.push(line.text.to_string());
                self.header = Some(header);
            }
            return self;
        }

        match line.line_type {
            LineType::SectionHeader => {
                self.close_section();
                trace!(line = line.number, "header block opened");
                self.header = Some(HeaderBlock {
                    line: line.number,
                    name_lines: Vec::new(),
                });
            }
            LineType::ExampleHeader => match self
                .current
                .as_mut()
                .and_then(SectionBuilder::current_example)
            {
                Some(example) if example.mode() == CollectMode::Source => {
                    trace!(line = line.number, "source/tree divider");
                    example.switch_to_tree();
                }
                Some(example) => example.push(&line),
                None => warn!(
                    line = line.number,
                    "divider before the first header block, ignoring"
                ),
            },
            LineType::Content => {
                if let Some(example) = self
                    .current
                    .as_mut()
                    .and_then(SectionBuilder::current_example)
                {
                    example.push(&line);
                }
            }
        }
        self
    }

    pub fn finish(mut self, origin: Option<PathBuf>) -> ParsedCorpus {
        if let Some(header) = self.header.take() {
            warn!(line = header.line, "unterminated header block, ignoring");
        }
        self.close_section();
        ParsedCorpus {
            origin,
            sections: self.sections,
        }
    }

    fn open_section(&mut self, header: HeaderBlock) {
        let name = header.name();
        trace!(
            line = header.line,
            name = name.as_str(),
            "header block closed"
        );
        let mut section = SectionBuilder::new(name.clone(), self.sections.len(), header.line);
        section.start_example(name, header.line);
        self.current = Some(section);
    }

    fn close_section(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section.finish());
        }
    }
}

/// Fold a sequence of lines into sections using the delimited dialect.
pub fn fold_lines_delimited<'a, I>(lines: I, origin: Option<PathBuf>) -> ParsedCorpus
where
    I: IntoIterator<Item = ClassifiedLine<'a>>,
{
    lines
        .into_iter()
        .fold(DelimitedState::new(), DelimitedState::step)
        .finish(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::lexing::classified_lines;

    fn parse(text: &str) -> ParsedCorpus {
        fold_lines_delimited(classified_lines(text), None)
    }

    #[test]
    fn name_spans_the_lines_between_delimiters() {
        let corpus = parse("=====\nfirst part\nsecond part\n=====\nx;\n---\n(x)\n");
        assert_eq!(corpus.sections[0].name, "first part\nsecond part");
        assert_eq!(
            corpus.sections[0].examples[0].name,
            "first part\nsecond part"
        );
    }

    #[test]
    fn divider_splits_source_from_tree() {
        let corpus = parse("===\nlisp\n===\n\n(+ 1 2)\n\n---\n\n(list (sym) (num) (num))\n");
        let example = &corpus.sections[0].examples[0];
        assert_eq!(example.source, "(+ 1 2)");
        assert_eq!(example.tree, "(list (sym) (num) (num))");
    }

    #[test]
    fn consecutive_tests_become_sections() {
        let corpus = parse("===\none\n===\na;\n---\n(a)\n\n===\ntwo\n===\nb;\n---\n(b)\n");
        assert_eq!(corpus.sections.len(), 2);
        assert_eq!(corpus.sections[0].examples[0].tree, "(a)");
        assert_eq!(corpus.sections[1].name, "two");
        assert_eq!(corpus.sections[1].line, 8);
        assert_eq!(corpus.sections[1].examples[0].line, 8);
    }

    #[test]
    fn later_dividers_are_tree_text() {
        let corpus = parse("===\nt\n===\na;\n---\n(a)\n---\n(b)\n");
        assert_eq!(corpus.sections[0].examples[0].tree, "(a)\n---\n(b)");
    }

    #[test]
    fn unterminated_header_block_is_dropped() {
        let corpus = parse("===\nok\n===\na;\n---\n(a)\n===\ndangling\n");
        assert_eq!(corpus.sections.len(), 1);
        assert_eq!(corpus.sections[0].name, "ok");
    }

    #[test]
    fn header_state_is_visible() {
        let mut state = DelimitedState::new();
        let mut lines = classified_lines("===\nname\n===\n");
        state = state.step(lines.next().unwrap());
        assert!(state.in_header());
        state = state.step(lines.next().unwrap());
        assert!(state.in_header());
        state = state.step(lines.next().unwrap());
        assert!(!state.in_header());
    }
}
