//! Tree text normalization
//!
//!     Expected and actual trees are compared after collapsing every run of whitespace, line
//!     breaks included, into one space and trimming both ends. Only whitespace runs are touched:
//!     `( a )` stays `( a )`, it does not become `(a)`.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize whitespace in a rendered tree.
pub fn normalize_tree(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Whether two trees are equal once normalized.
pub fn trees_match(expected: &str, actual: &str) -> bool {
    normalize_tree(expected) == normalize_tree(actual)
}
