//! Validating parsed corpora against in-process and external engines.

use treecorpus_parser::corpus::loader::{load_corpora, LoadOptions};
use treecorpus_parser::corpus::testing::{assert_trees_eq, fixture_path, FnEngine, MapEngine};
use treecorpus_parser::corpus::validation::{EngineError, FailureKind, Validator};
use treecorpus_parser::corpus::{parse_corpus, CorpusError, Dialect};

const NUMBERS_TREE: &str =
    "(program (expression_statement (number)) (expression_statement (number)))";
const STRING_TREE: &str = "(program (expression_statement (string)))";
const CALL_TREE: &str =
    "(program (expression_statement (call_expression (identifier) (arguments))))";
// The inner call is missing its argument.
const NESTED_CALL_TREE: &str =
    "(program (expression_statement (call_expression (identifier) (arguments (call_expression (identifier) (arguments))))))";
const PARENTHESIZED_TREE: &str =
    "(source_file (binary_expression (parenthesized_expression (binary_expression (number) (number))) (number)))";

#[test]
fn spaces_inside_parens_are_a_mismatch() {
    let records = parse_corpus("=== s ===\n--- e ---\na;\n(a)\n").records();
    let report = Validator::new(MapEngine::new().with("a;", "( a )"))
        .validate(&records)
        .unwrap();

    assert!(report.passing.is_empty());
    let failure = &report.failing[0];
    assert_eq!(failure.kind, FailureKind::Mismatch);
    assert_eq!(
        failure.normalized(),
        ("(a)".to_string(), "( a )".to_string())
    );
}

#[test]
fn fixture_validates_against_a_matching_engine() {
    let options = LoadOptions::default();
    let corpora = load_corpora(fixture_path("expressions.txt"), &options).unwrap();
    let records: Vec<_> = corpora.iter().flat_map(|c| c.records()).collect();

    // Renders everything on one line, which must not matter.
    let engine = MapEngine::new()
        .with("1;\n2.5;", NUMBERS_TREE)
        .with("\"hello\";", STRING_TREE)
        .with("f();", CALL_TREE)
        .with("f(g(x));", NESTED_CALL_TREE);

    let outcomes = Validator::new(engine).run(&records).unwrap();
    let verdicts: Vec<_> = outcomes.iter().map(|o| (o.name(), o.is_pass())).collect();
    assert_eq!(
        verdicts,
        [
            ("literals numbers", true),
            ("literals strings", true),
            ("calls no arguments", true),
            ("calls nested", false),
        ]
    );
}

#[test]
fn delimited_fixture_round_trips_through_the_validator() {
    let options = LoadOptions {
        dialect: Dialect::Delimited,
        ..LoadOptions::default()
    };
    let corpora = load_corpora(fixture_path("delimited.txt"), &options).unwrap();
    let records = corpora[0].records();

    let engine = FnEngine::new(|source: &str| match records_tree(source) {
        Some(tree) => Ok(tree.to_string()),
        None => Err(EngineError::Parse("unknown".into())),
    });
    let report = Validator::new(engine).validate(&records).unwrap();
    assert!(report.is_success(), "{:?}", report.failing);
    assert_trees_eq(
        &records[0].expected_tree,
        "(source_file (binary_expression (number) (number)))",
    );
}

fn records_tree(source: &str) -> Option<&'static str> {
    match source {
        "1 + 2" => Some("(source_file\n (binary_expression (number) (number)))"),
        "(1 + 2) * 3" => Some(PARENTHESIZED_TREE),
        _ => None,
    }
}

#[test]
fn missing_corpus_is_input_not_found() {
    let err = load_corpora(fixture_path("nope.txt"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CorpusError::InputNotFound(_)));
}

#[cfg(unix)]
mod external {
    use super::*;
    use treecorpus_parser::corpus::validation::{CommandEngine, CommandSpec};

    #[test]
    fn command_engine_output_is_compared() {
        let records = parse_corpus("=== s ===\n--- e ---\na;\n(a)\n").records();
        let spec = CommandSpec::new("sh").args(["-c", "printf '(a)\\n'"]);
        let engine = CommandEngine::load(spec).unwrap();
        let report = Validator::new(engine).validate(&records).unwrap();
        assert!(report.is_success());
    }

    #[test]
    fn failing_command_is_an_engine_error() {
        let records = parse_corpus("=== s ===\n--- e ---\na;\n(a)\n").records();
        let spec = CommandSpec::new("sh").args(["-c", "echo syntax error >&2; exit 1"]);
        let engine = CommandEngine::load(spec).unwrap();
        let report = Validator::new(engine).validate(&records).unwrap();
        assert!(matches!(
            &report.failing[0].kind,
            FailureKind::EngineError { message } if message.contains("syntax error")
        ));
    }
}
