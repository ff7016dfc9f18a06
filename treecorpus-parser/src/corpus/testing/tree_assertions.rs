//! Tree comparison assertions
//!
//! Trees are compared after normalization, like the validator does. When they differ the report
//! shows the trees as written, line by line, since that is where a human spots the difference.

use crate::corpus::formats::line_diff;
use crate::corpus::normalization::trees_match;

/// Assert that two trees are equal once normalized, with a line diff on failure
///
/// # Panics
///
/// Panics if the normalized trees differ.
pub fn assert_trees_eq(expected: &str, actual: &str) {
    if let Some(diff) = diff_trees(expected, actual) {
        panic!("\n\nTree comparison failed:\n{}\n", diff);
    }
}

/// Compare two trees and return a diff report without panicking
///
/// Returns `None` if the trees match after normalization, or `Some(diff_report)` if they differ.
pub fn diff_trees(expected: &str, actual: &str) -> Option<String> {
    if trees_match(expected, actual) {
        return None;
    }
    Some(line_diff(expected, actual))
}
