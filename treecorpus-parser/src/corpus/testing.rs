//! Testing utilities
//!
//!     Helpers for testing code that consumes corpora without a real grammar on hand:
//!
//!         - [MapEngine]: renders from a fixed source-to-tree table
//!         - [FnEngine]: renders through a closure, handy for scripted failures
//!         - [assert_trees_eq]: compares two trees the way the validator does and panics with a
//!           line diff when they differ
//!         - [fixture_path]: resolves a file under a crate's `tests/fixtures`

mod engines;
mod tree_assertions;

pub use engines::{FnEngine, MapEngine};
pub use tree_assertions::{assert_trees_eq, diff_trees};

use std::path::PathBuf;

/// Path of a fixture file relative to this crate's `tests/fixtures` directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
