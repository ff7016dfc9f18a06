//! # treecorpus-parser
//!
//! A parser and validator for syntax-tree test corpora.
//!
//! A corpus file pairs snippets of source code with the tree a grammar is expected to produce for
//! them. This crate turns corpus text into ordered test records and, given a grammar engine,
//! checks each record's expected tree against what the engine actually renders.
//!
//! File Layout
//!
//!     src/corpus
//!       ├── lexing         Line classification (section header, example header, content)
//!       ├── parsing        The corpus state machine, one reducer per dialect
//!       ├── ast            Sections, examples, test records and their locations
//!       ├── normalization  Whitespace canonicalization for tree comparison
//!       ├── validation     The grammar engine seam and the validator
//!       ├── loader         Reading corpus files and discovering them in directories
//!       ├── filter         Selecting records by name
//!       ├── formats        JSON and summary output
//!       └── testing        In-process engines and assertions for tests
//!
//! Data flows leaf first: raw text is split into classified lines, the state machine folds those
//! lines into sections and examples, the sections are flattened into test records, and the
//! validator compares each record against the engine output.

pub mod corpus;
