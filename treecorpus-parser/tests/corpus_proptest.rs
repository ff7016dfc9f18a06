//! Property-based tests for corpus parsing and tree normalization

use proptest::prelude::*;
use treecorpus_parser::corpus::lexing::classified_lines;
use treecorpus_parser::corpus::normalization::normalize_tree;
use treecorpus_parser::corpus::parse_corpus;
use treecorpus_parser::corpus::parsing::{CollectMode, ParseState, Phase};

/// Lines that can never be headers: they never start with `=` or `-`.
fn headerless_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ;(){}]{0,30}",
        " [=-]{3,6}[a-z ]{0,10}",
        "[=-]{1,2}[a-z ]{0,10}",
        "\\(+[a-z ]{0,10}\\)*",
    ]
}

/// Whitespace to splice between tokens: spaces, tabs and line breaks.
fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\n\r]{1,5}"
}

fn tree_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z_()]{1,8}", 1..12)
}

proptest! {
    #[test]
    fn headerless_text_yields_no_sections(
        lines in prop::collection::vec(headerless_line_strategy(), 0..40),
    ) {
        let text = lines.join("\n");
        let corpus = parse_corpus(&text);
        prop_assert!(corpus.sections.is_empty());
        prop_assert!(corpus.records().is_empty());
    }

    #[test]
    fn normalization_is_idempotent(text in "\\PC{0,80}") {
        let once = normalize_tree(&text);
        prop_assert_eq!(normalize_tree(&once), once);
    }

    #[test]
    fn whitespace_only_differences_normalize_alike(
        tokens in tree_tokens_strategy(),
        left in prop::collection::vec(whitespace_strategy(), 12),
        right in prop::collection::vec(whitespace_strategy(), 12),
    ) {
        let spread = |gaps: &[String]| {
            tokens
                .iter()
                .zip(gaps.iter())
                .map(|(token, gap)| format!("{}{}", token, gap))
                .collect::<String>()
        };
        prop_assert_eq!(normalize_tree(&spread(&left)), normalize_tree(&spread(&right)));
    }

    #[test]
    fn source_stops_growing_after_the_switch(
        before in prop::collection::vec("[a-z;]{1,10}", 0..5),
        after in prop::collection::vec(headerless_line_strategy(), 0..10),
    ) {
        let mut text = String::from("=== s ===\n--- e ---\n");
        for line in &before {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("(tree)\n");
        for line in &after {
            text.push_str(line);
            text.push('\n');
        }

        let mut state = ParseState::new();
        let mut source_at_switch: Option<String> = None;
        for line in classified_lines(&text) {
            state = state.step(line);
            let source = state.current_source().map(str::to_string);
            match (state.phase(), source_at_switch.clone()) {
                (Phase::InExample(CollectMode::Tree), None) => source_at_switch = source,
                (Phase::InExample(CollectMode::Tree), Some(frozen)) => {
                    prop_assert_eq!(Some(frozen), source)
                }
                (Phase::InExample(CollectMode::Source), Some(_)) => {
                    prop_assert!(false, "switched back to source")
                }
                _ => {}
            }
        }
        prop_assert!(source_at_switch.is_some());

        let corpus = state.finish(None);
        prop_assert_eq!(corpus.sections[0].examples[0].source.clone(), before.join("\n"));
    }

    #[test]
    fn example_count_matches_example_headers(counts in prop::collection::vec(0usize..5, 1..6)) {
        let mut text = String::new();
        for (s, count) in counts.iter().enumerate() {
            text.push_str(&format!("=== section {} ===\n", s));
            for e in 0..*count {
                text.push_str(&format!("--- example {} ---\nx{};\n(x)\n", e, e));
            }
        }
        let corpus = parse_corpus(&text);
        let per_section: Vec<_> = corpus.sections.iter().map(|s| s.examples.len()).collect();
        prop_assert_eq!(per_section, counts.clone());
        prop_assert_eq!(corpus.records().len(), counts.iter().sum::<usize>());
    }
}
